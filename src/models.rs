#![allow(clippy::match_wildcard_for_single_variants)]

use core::fmt;

use serde::{Deserialize, Serialize};

pub type Cards = Vec<Card>;

/// The closed set of rich-media shapes a card can stand in for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, uniffi::Enum,
)]
pub enum CardKind {
    VideoEmbed,
    Gallery,
    Audio,
    Video,
    RawHtml,
}

impl CardKind {
    pub const ALL: [Self; 5] = [
        Self::VideoEmbed,
        Self::Gallery,
        Self::Audio,
        Self::Video,
        Self::RawHtml,
    ];

    /// Name used inside placeholder tokens and card ids
    #[must_use]
    pub const fn token_name(self) -> &'static str {
        match self {
            Self::VideoEmbed => "youtube",
            Self::Gallery => "gallery",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::RawHtml => "html",
        }
    }

    #[must_use]
    pub fn from_token_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token_name() == name)
    }

    /// Card id for the `index`-th card of this kind
    #[must_use]
    pub fn card_id(self, index: usize) -> String {
        format!("{}-{index}", self.token_name())
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}

/// One image inside a gallery figure
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct GalleryImage {
    pub src: String,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl GalleryImage {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: None,
            height: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }
}

/// Kind-specific data carried by a card
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Enum)]
pub enum CardPayload {
    VideoEmbed {
        video_id: String,
    },
    Gallery {
        images: Vec<GalleryImage>,
        width_wide: bool,
    },
    Audio {
        src: String,
    },
    Video {
        src: String,
    },
    RawHtml,
}

impl CardPayload {
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::VideoEmbed { .. } => CardKind::VideoEmbed,
            Self::Gallery { .. } => CardKind::Gallery,
            Self::Audio { .. } => CardKind::Audio,
            Self::Video { .. } => CardKind::Video,
            Self::RawHtml => CardKind::RawHtml,
        }
    }
}

/// Rich-media markup protected from the text editor behind a placeholder token
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct Card {
    pub id: String,
    pub payload: CardPayload,
    /// Exact markup the card was extracted from, reinserted verbatim
    pub original_markup: String,
}

impl Card {
    #[must_use]
    pub fn new(id: String, payload: CardPayload, original_markup: String) -> Self {
        Self {
            id,
            payload,
            original_markup,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.payload.kind()
    }

    /// Placeholder token standing in for this card
    #[must_use]
    pub fn token(&self) -> String {
        crate::token::format_token(self.kind(), &self.id)
    }

    /// Human-readable description for editor chrome
    #[must_use]
    pub fn label(&self) -> String {
        match &self.payload {
            CardPayload::VideoEmbed { video_id } => format!("YouTube video: {video_id}"),
            CardPayload::Gallery { images, .. } => match images.len() {
                1 => "Gallery: 1 image".to_string(),
                n => format!("Gallery: {n} images"),
            },
            CardPayload::Audio { .. } => "Audio player".to_string(),
            CardPayload::Video { .. } => "Video player".to_string(),
            CardPayload::RawHtml => "HTML block".to_string(),
        }
    }

    /// Media URL for single-source cards
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match &self.payload {
            CardPayload::Audio { src } | CardPayload::Video { src } => Some(src),
            _ => None,
        }
    }
}

macro_rules! impl_payload_helpers {
    ($($variant:ident),*) => {
        $(
            impl Card {
                paste::paste! {
                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self.payload, CardPayload::$variant { .. })
                    }
                }
            }
        )*
    };
}

impl_payload_helpers!(VideoEmbed, Gallery, Audio, Video, RawHtml);

/// Editable text plus the cards its placeholders refer to
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, uniffi::Record)]
pub struct Extraction {
    pub text: String,
    pub cards: Cards,
}

impl Extraction {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }
}

/// Media the editor toolbar asks to insert
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum MediaRequest {
    VideoEmbed { video_id: String },
    Audio { src: String },
    Video { src: String },
}

impl MediaRequest {
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::VideoEmbed { .. } => CardKind::VideoEmbed,
            Self::Audio { .. } => CardKind::Audio,
            Self::Video { .. } => CardKind::Video,
        }
    }
}

/// A freshly created card and the token to place at the cursor
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct InsertedCard {
    pub token: String,
    pub card: Card,
}

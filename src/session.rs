//! Editor-held state for one post: the editable text and its cards

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::converter::{self, Converter};
use crate::error::{InsertResult, SerializationError, SerializationResult};
use crate::mobiledoc::{self, MobiledocSplit};
use crate::models::{Card, CardKind, Cards, InsertedCard, MediaRequest};
use crate::token;

/// Text plus cards for a single editing session.
///
/// Cards are created once on open and then only appended to. Their ids stay
/// stable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditSession {
    id: String,
    text: String,
    cards: Cards,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Start an empty session
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: String::new(),
            cards: Vec::new(),
        }
    }

    /// Load stored HTML into a new session
    #[must_use]
    pub fn open(converter: &Converter, html: &str) -> Self {
        let extraction = converter.extract(html);
        let session = Self {
            text: extraction.text,
            cards: extraction.cards,
            ..Self::new()
        };
        debug!(session = %session.id, cards = session.cards.len(), "opened edit session");
        session
    }

    /// Load a split Mobiledoc document into a new session.
    ///
    /// Retained `html` cards become raw-HTML cards whose tokens follow the
    /// Markdown, which is where a rebuilt document places them. The tokens
    /// only feed the preview; [`EditSession::markdown`] drops them.
    #[must_use]
    pub fn open_mobiledoc(converter: &Converter, split: &MobiledocSplit) -> Self {
        let mut session = Self::open(converter, &split.markdown);
        let raw_cards = mobiledoc::raw_html_cards(&split.retained);
        for card in &raw_cards {
            session
                .text
                .push_str(&token::format_block_token(card.kind(), &card.id));
        }
        session.text = session.text.trim().to_string();
        session.cards.extend(raw_cards);
        session
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Add cards that came from somewhere other than extraction
    pub fn extend_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Create a card for toolbar media and place its token in the text.
    ///
    /// The token goes at byte offset `cursor` (moved back to a char
    /// boundary), or at the end when `cursor` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request has an empty payload
    pub fn insert_media(
        &mut self,
        converter: &Converter,
        request: &MediaRequest,
        cursor: Option<usize>,
    ) -> InsertResult<InsertedCard> {
        let kind = request.kind();
        let mut next_index = self.cards.len();
        while self.cards.iter().any(|card| card.id == kind.card_id(next_index)) {
            next_index += 1;
        }

        let inserted = converter.insert_card(request, next_index)?;
        let block = token::format_block_token(kind, &inserted.card.id);

        let at = cursor.map_or(self.text.len(), |at| floor_char_boundary(&self.text, at));
        self.text.insert_str(at, &block);
        self.cards.push(inserted.card.clone());

        debug!(session = %self.id, card = %inserted.card.id, "inserted media card");
        Ok(inserted)
    }

    /// HTML for the live preview; dangling tokens are annotated
    #[must_use]
    pub fn preview(&self) -> String {
        converter::preview(&self.text, &self.cards)
    }

    /// HTML to persist
    #[must_use]
    pub fn save(&self) -> String {
        converter::reinsert(&self.text, &self.cards)
    }

    /// Markdown for [`mobiledoc::rebuild`]: the saved text without the
    /// raw-HTML tokens added by [`EditSession::open_mobiledoc`]
    #[must_use]
    pub fn markdown(&self) -> String {
        let without_raw = token::replace_placeholders(&self.text, |placeholder| {
            let retained = placeholder.kind == CardKind::RawHtml
                && self
                    .cards
                    .iter()
                    .any(|card| card.id == placeholder.id && card.is_raw_html());
            retained.then(String::new)
        });
        converter::reinsert(&without_raw, &self.cards)
            .trim()
            .to_string()
    }

    /// Encode the session for the host's form state
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn to_bytes(&self) -> SerializationResult<Vec<u8>> {
        serde_cbor::to_vec(self).map_err(|e| SerializationError::serialization_failed(e.to_string()))
    }

    /// Restore a session written by [`EditSession::to_bytes`]
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid snapshot
    pub fn from_bytes(data: &[u8]) -> SerializationResult<Self> {
        serde_cbor::from_slice(data)
            .map_err(|e| SerializationError::deserialization_failed(e.to_string()))
    }
}

fn floor_char_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

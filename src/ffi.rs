//! `UniFFI` bindings for the shortcode converter
//!
//! The editor UI holds a [`ShortcodeEditor`] per open post and calls into it
//! on load, on toolbar inserts, on preview and on save.
#![allow(clippy::needless_pass_by_value)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::config::ConverterConfig;
use crate::converter::{self, Converter};
use crate::error::{ConfigError, InsertError, MobiledocError, SerializationError};
use crate::mobiledoc::{self, MobiledocSplit};
use crate::models::{Card, CardKind, Extraction, InsertedCard};
use crate::session::EditSession;

/// Mobiledoc split for FFI; retained cards travel as JSON strings
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobiledocParts {
    pub markdown: String,
    pub retained_cards: Vec<String>,
}

impl From<MobiledocSplit> for MobiledocParts {
    fn from(split: MobiledocSplit) -> Self {
        Self {
            markdown: split.markdown,
            retained_cards: split.retained.iter().map(Value::to_string).collect(),
        }
    }
}

fn parse_retained(retained_cards: &[String]) -> Result<Vec<Value>, MobiledocError> {
    retained_cards
        .iter()
        .map(|card| {
            serde_json::from_str::<Value>(card)
                .map_err(|e| MobiledocError::invalid_json(e.to_string()))
        })
        .collect()
}

/// Byte offset in `text` of a UTF-16 code unit offset, as platform text
/// views report selections. Offsets inside a surrogate pair move back to
/// the start of the character.
fn utf16_to_byte_offset(text: &str, utf16: usize) -> usize {
    let mut units = 0;
    for (at, ch) in text.char_indices() {
        units += ch.len_utf16();
        if units > utf16 {
            return at;
        }
    }
    text.len()
}

#[uniffi::export]
#[must_use]
pub fn extract_shortcodes(html: &str) -> Extraction {
    converter::extract(html)
}

#[uniffi::export]
#[must_use]
pub fn reinsert_shortcodes(text: &str, cards: Vec<Card>) -> String {
    converter::reinsert(text, &cards)
}

#[uniffi::export]
#[must_use]
pub fn preview_shortcodes(text: &str, cards: Vec<Card>) -> String {
    converter::preview(text, &cards)
}

#[uniffi::export]
#[must_use]
pub fn card_label(card: Card) -> String {
    card.label()
}

/// # Errors
///
/// Returns an error if the document is not valid Mobiledoc
#[uniffi::export]
pub fn split_mobiledoc(source: &str) -> Result<MobiledocParts, MobiledocError> {
    Ok(mobiledoc::split(source)?.into())
}

/// # Errors
///
/// Returns an error if a retained card is not valid JSON
#[uniffi::export]
pub fn rebuild_mobiledoc(
    markdown: &str,
    retained_cards: Vec<String>,
) -> Result<String, MobiledocError> {
    mobiledoc::rebuild(markdown, &parse_retained(&retained_cards)?)
}

/// One editing session, shared with the platform UI
#[derive(uniffi::Object)]
pub struct ShortcodeEditor {
    converter: Converter,
    session: Mutex<EditSession>,
}

impl ShortcodeEditor {
    fn session(&self) -> MutexGuard<'_, EditSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl ShortcodeEditor {
    /// Create an editor with the default configuration
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Self {
        Self {
            converter: Converter::new(),
            session: Mutex::new(EditSession::new()),
        }
    }

    /// Create an editor with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    #[uniffi::constructor]
    pub fn with_config(config: ConverterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            converter: Converter::with_config(config)?,
            session: Mutex::new(EditSession::new()),
        })
    }

    /// Replace the session with one loaded from stored HTML
    pub fn open(&self, html: &str) {
        *self.session() = EditSession::open(&self.converter, html);
    }

    pub fn session_id(&self) -> String {
        self.session().id().to_string()
    }

    pub fn text(&self) -> String {
        self.session().text().to_string()
    }

    pub fn set_text(&self, text: String) {
        self.session().set_text(text);
    }

    pub fn cards(&self) -> Vec<Card> {
        self.session().cards().to_vec()
    }

    /// Replace the session with a Mobiledoc post. The retained cards are
    /// handed back to [`ShortcodeEditor::save_mobiledoc`] on save.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid Mobiledoc
    pub fn open_mobiledoc(&self, source: &str) -> Result<MobiledocParts, MobiledocError> {
        let split = mobiledoc::split(source)?;
        *self.session() = EditSession::open_mobiledoc(&self.converter, &split);
        Ok(split.into())
    }

    /// # Errors
    ///
    /// Returns an error if a retained card is not valid JSON
    pub fn save_mobiledoc(&self, retained_cards: Vec<String>) -> Result<String, MobiledocError> {
        let markdown = self.session().markdown();
        mobiledoc::rebuild(&markdown, &parse_retained(&retained_cards)?)
    }

    /// Insert toolbar media; `source` is a URL, or a video link or id.
    ///
    /// `cursor` is a UTF-16 code unit offset into the text, the unit
    /// Android, iOS and web text views use; `None` appends.
    ///
    /// # Errors
    ///
    /// Returns an error for gallery/raw HTML kinds and for unusable input
    pub fn insert_media(
        &self,
        kind: CardKind,
        source: &str,
        cursor: Option<u32>,
    ) -> Result<InsertedCard, InsertError> {
        let request = self.converter.media_request(kind, source)?;
        let mut session = self.session();
        let at = cursor.map(|units| utf16_to_byte_offset(session.text(), units as usize));
        session.insert_media(&self.converter, &request, at)
    }

    pub fn preview(&self) -> String {
        self.session().preview()
    }

    pub fn save(&self) -> String {
        self.session().save()
    }

    /// # Errors
    ///
    /// Returns an error if the session cannot be encoded
    pub fn snapshot(&self) -> Result<Vec<u8>, SerializationError> {
        self.session().to_bytes()
    }

    /// # Errors
    ///
    /// Returns an error if `data` is not a session snapshot
    pub fn restore(&self, data: Vec<u8>) -> Result<(), SerializationError> {
        let restored = EditSession::from_bytes(&data)?;
        *self.session() = restored;
        Ok(())
    }
}

impl Default for ShortcodeEditor {
    fn default() -> Self {
        Self::new()
    }
}

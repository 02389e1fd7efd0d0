#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod config;
pub mod converter;
pub mod error;
pub mod ffi;
pub mod html;
pub mod media;
pub mod mobiledoc;
pub mod models;
pub mod session;
pub mod token;

pub use config::ConverterConfig;
pub use converter::{Converter, extract, preview, reinsert};
pub use models::{Card, CardKind, CardPayload, Extraction, GalleryImage, InsertedCard, MediaRequest};
pub use session::EditSession;

// Re-export common error types for convenience
pub use error::{
    ConfigError, ConfigResult, InsertError, InsertResult, MobiledocError, MobiledocResult,
    SerializationError, SerializationResult,
};

//! Error types for the shortcode library
//!
//! Extraction, reinsertion and preview never fail. The errors here belong to
//! the supporting surfaces: configuration, card insertion, Mobiledoc bodies
//! and session snapshots.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum ConfigError {
    /// The configuration source could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidSource(String),

    /// A field holds a value the converter cannot work with
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ConfigError {
    /// Create an invalid source error
    pub fn invalid_source(reason: impl Into<String>) -> Self {
        Self::InvalidSource(reason.into())
    }

    /// Create an invalid field error
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when building a new card from an editor action
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum InsertError {
    /// Cards of this kind are only ever extracted, never created
    #[error("Cards of kind `{0}` cannot be inserted")]
    UnsupportedKind(String),

    /// The video id or source URL was empty
    #[error("Empty payload for `{0}` card")]
    EmptyPayload(String),

    /// A pasted video link could not be resolved to a video id
    #[error("Unrecognized video reference: {0}")]
    UnrecognizedVideo(String),
}

impl InsertError {
    /// Create an unsupported kind error
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedKind(kind.into())
    }

    /// Create an empty payload error
    pub fn empty_payload(kind: impl Into<String>) -> Self {
        Self::EmptyPayload(kind.into())
    }

    /// Create an unrecognized video error
    pub fn unrecognized_video(input: impl Into<String>) -> Self {
        Self::UnrecognizedVideo(input.into())
    }
}

/// Result type for card insertion
pub type InsertResult<T> = Result<T, InsertError>;

/// Mobiledoc body errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum MobiledocError {
    /// The document is not valid JSON
    #[error("Invalid Mobiledoc JSON: {0}")]
    InvalidJson(String),

    /// The JSON does not have the Mobiledoc shape
    #[error("Malformed Mobiledoc: {0}")]
    Malformed(String),
}

impl MobiledocError {
    /// Create an invalid JSON error
    pub fn invalid_json(reason: impl Into<String>) -> Self {
        Self::InvalidJson(reason.into())
    }

    /// Create a malformed document error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// Result type for Mobiledoc operations
pub type MobiledocResult<T> = Result<T, MobiledocError>;

/// Serialization-related errors
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum SerializationError {
    /// Serialization failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl SerializationError {
    /// Create a serialization failed error
    pub fn serialization_failed(reason: impl Into<String>) -> Self {
        Self::SerializationFailed(reason.into())
    }

    /// Create a deserialization failed error
    pub fn deserialization_failed(reason: impl Into<String>) -> Self {
        Self::DeserializationFailed(reason.into())
    }
}

/// Result type for serialization operations
pub type SerializationResult<T> = Result<T, SerializationError>;

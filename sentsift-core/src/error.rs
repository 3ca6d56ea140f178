//! Error types for configuration and resource loading
//!
//! Rejecting a paragraph or a sentence is never an error. Those outcomes are
//! reported as [`ParagraphRejection`](crate::paragraph::ParagraphRejection)
//! and [`SentenceRejection`](crate::sentence::SentenceRejection) values.

use thiserror::Error;

/// Core errors (configuration and word-list loading only)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A threshold is outside its permitted range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(String),

    /// I/O error while reading a configuration file or word list
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::ConfigSerialize(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

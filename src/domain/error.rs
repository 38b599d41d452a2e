//! Domain error types

use thiserror::Error;

/// Error when a note is given empty content
#[derive(Debug, Clone, Error)]
#[error("Note content must not be empty")]
pub struct EmptyContentError;

/// Error when parsing a locale tag
#[derive(Debug, Clone, Error)]
#[error("Invalid locale: \"{input}\". Expected a BCP 47-style tag such as pt-BR or en-US")]
pub struct InvalidLocaleError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

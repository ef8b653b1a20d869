//! Error types for fueleco

use thiserror::Error;

use crate::NavigationPath;

/// Errors raised while turning raw input into vehicle records
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Record {index}: missing or invalid field \"{field}\"")]
    MissingField { field: String, index: usize },

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl DecodeError {
    pub fn missing_field(field: &str, index: usize) -> Self {
        DecodeError::MissingField {
            field: field.to_string(),
            index,
        }
    }
}

/// Raised when averages are requested over zero vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot aggregate an empty vehicle group")]
pub struct EmptyAggregateError;

/// Errors raised by catalog navigation queries
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Not found in catalog: {0}")]
    NotFound(NavigationPath),

    #[error(transparent)]
    EmptyAggregate(#[from] EmptyAggregateError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

impl From<EmptyAggregateError> for Error {
    fn from(err: EmptyAggregateError) -> Self {
        Error::Navigation(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

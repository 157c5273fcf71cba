//! Quote domain errors

use thiserror::Error;

/// Errors that can occur while validating or rating a quote application
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// Required field is missing from the application
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field could not be parsed as the expected type
    #[error("Field '{field}' is not a valid integer: '{value}'")]
    ParseError { field: String, value: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown rate profile name in configuration
    #[error("Unknown rate profile: {0}")]
    UnknownProfile(String),
}

impl QuoteError {
    /// Creates a missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        QuoteError::MissingField(field.into())
    }

    /// Creates a parse error for a field/value pair
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        QuoteError::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }
}

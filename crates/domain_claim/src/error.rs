//! Claim domain errors

use thiserror::Error;

/// Errors that can occur while validating a claim submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// Required field is missing from the submission
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A field could not be parsed as the expected type
    #[error("Field '{field}' has an invalid value: '{value}'")]
    ParseError { field: String, value: String },
}

impl ClaimError {
    /// Creates a missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        ClaimError::MissingField(field.into())
    }

    /// Creates a parse error for a field/value pair
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        ClaimError::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }
}

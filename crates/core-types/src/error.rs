use serde::Serialize;
use thiserror::Error;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The field was absent or blank.
    Missing,
    /// The field was present but malformed or out of range.
    #[default]
    Invalid,
}

/// A rejected request payload.
///
/// `field` names the offending JSON key (camelCase, as the client sent it).
/// Only `message` and `field` reach the client.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip)]
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// A malformed value in a single field.
    pub fn for_field(field: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.to_string()),
            kind: ValidationErrorKind::Invalid,
        }
    }

    /// A required field that was absent or blank.
    pub fn missing(field: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::Missing,
            ..Self::for_field(field, message)
        }
    }

    pub fn is_missing(&self) -> bool {
        self.kind == ValidationErrorKind::Missing
    }
}

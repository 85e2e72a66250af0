//! Error types for foreign key validation and parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape violations of a foreign key's reference
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ReferenceError {
    /// `resource` or `fields` is absent
    #[error("A foreign key's reference must have the fields and resource properties.")]
    MissingProperties,

    /// `fields` is neither a single name nor a list of names
    #[error("The foreign key's reference fields property must be a string or an array.")]
    InvalidFieldsType,

    /// `fields` is an array holding something other than field names
    #[error("The foreign key's reference fields array must contain only field names.")]
    InvalidFieldName,
}

/// Errors that can occur while validating a foreign key.
///
/// Each variant displays a fixed, user-facing message. Reference failures are
/// wrapped so that both sides of the key surface through one error kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ForeignKeyError {
    /// `fields` or `reference` is absent
    #[error("A foreign key must have the fields and reference properties.")]
    MissingProperties,

    /// Local `fields` is neither a single name nor a list of names
    #[error("The foreign key's fields property must be a string or an array.")]
    InvalidFieldsType,

    /// Local `fields` is a list but the reference's is not
    #[error("The reference's fields property must be an array if the outer fields is an array.")]
    ReferenceFieldsNotArray,

    /// Local `fields` is a single name but the reference's is not
    #[error("The reference's fields property must be a string if the outer fields is a string.")]
    ReferenceFieldsNotString,

    /// Both sides are lists of different lengths
    #[error(
        "The reference's fields property must be an array of the same length as that of the outer fields' array."
    )]
    FieldsLengthMismatch {
        fields: usize,
        reference_fields: usize,
    },

    /// Local `fields` is an array holding something other than field names
    #[error("The foreign key's fields array must contain only field names.")]
    InvalidFieldName,

    /// The embedded reference is itself malformed
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// Errors returned when building a descriptor from JSON input
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input text is not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input parsed but failed strict validation
    #[error(transparent)]
    Validation(#[from] ForeignKeyError),
}

impl From<ReferenceError> for ParseError {
    fn from(e: ReferenceError) -> Self {
        ParseError::Validation(e.into())
    }
}

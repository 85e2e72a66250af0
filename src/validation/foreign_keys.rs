//! Foreign key shape validation
//!
//! Structural checks only: whether the referenced resource or fields exist
//! elsewhere in a package is not checked here.

use super::error::{ForeignKeyError, ReferenceError};
use crate::models::{Fields, Reference};

/// Validate the target side of a foreign key.
///
/// # Rules
///
/// - `resource` and `fields` must both be present (an empty resource name is allowed)
/// - `fields` must be a single name or an array
/// - an array may only hold field names
pub fn validate_reference(
    resource: Option<&str>,
    fields: Option<&Fields>,
) -> Result<(), ReferenceError> {
    match (resource, fields) {
        (None, _) | (_, None) => Err(ReferenceError::MissingProperties),
        (Some(_), Some(Fields::Unsupported(_))) => Err(ReferenceError::InvalidFieldsType),
        (Some(_), Some(Fields::MixedSequence(_))) => Err(ReferenceError::InvalidFieldName),
        _ => Ok(()),
    }
}

/// Validate a foreign key against its reference.
///
/// Rules are evaluated in order and the first violation is returned:
///
/// 1. `fields` and `reference` must both be present
/// 2. `fields` must be a single name or an array
/// 3. an array of fields requires the reference's fields to be an array
/// 4. a single field requires the reference's field to be a single name
/// 5. two arrays must have the same length
/// 6. an array of fields may only hold field names
pub fn validate_foreign_key(
    fields: Option<&Fields>,
    reference: Option<&Reference>,
) -> Result<(), ForeignKeyError> {
    let (Some(fields), Some(reference)) = (fields, reference) else {
        return Err(ForeignKeyError::MissingProperties);
    };

    match (fields, reference.fields()) {
        (Fields::Unsupported(_), _) => Err(ForeignKeyError::InvalidFieldsType),
        (Fields::Single(_), Some(Fields::Single(_))) => Ok(()),
        (Fields::Single(_), _) => Err(ForeignKeyError::ReferenceFieldsNotString),
        (local, referenced) => {
            let Some(referenced) = referenced.filter(|r| r.is_sequence()) else {
                return Err(ForeignKeyError::ReferenceFieldsNotArray);
            };
            if local.len() != referenced.len() {
                return Err(ForeignKeyError::FieldsLengthMismatch {
                    fields: local.len(),
                    reference_fields: referenced.len(),
                });
            }
            if let Fields::MixedSequence(_) = local {
                return Err(ForeignKeyError::InvalidFieldName);
            }
            Ok(())
        }
    }
}

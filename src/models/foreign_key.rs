//! Foreign key model: the source side of a table relationship

use super::fields::Fields;
use super::reference::Reference;
use crate::validation::error::{ForeignKeyError, ParseError};
use crate::validation::foreign_keys::validate_foreign_key;
use crate::validation::ValidationMode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

const JSON_KEY_FIELDS: &str = "fields";
const JSON_KEY_REFERENCE: &str = "reference";

/// A declaration that local field(s) reference field(s) of another resource.
///
/// The validation mode is fixed at construction. In strict mode a violation
/// is returned from the call that detected it; in lenient mode it is appended
/// to [`ForeignKey::errors`] and the call succeeds.
///
/// # Example
///
/// ```rust
/// use tableschema_fk::models::{ForeignKey, Reference};
/// use tableschema_fk::validation::ValidationMode;
///
/// let reference = Reference::new(
///     Some("customers".to_string()),
///     Some("id".into()),
///     ValidationMode::Strict,
/// )
/// .unwrap();
/// let fk = ForeignKey::new(Some("customer_id".into()), Some(reference), ValidationMode::Strict);
/// assert!(fk.is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForeignKey {
    /// Local field name(s)
    #[serde(skip_serializing_if = "crate::models::fields::is_omitted")]
    fields: Option<Fields>,
    /// Target of the key
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<Reference>,
    #[serde(skip)]
    mode: ValidationMode,
    /// Violations recorded in lenient mode, oldest first
    #[serde(skip)]
    errors: Vec<ForeignKeyError>,
}

impl ForeignKey {
    /// Create an empty foreign key to be filled in through setters
    pub fn with_mode(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Create a foreign key and validate it immediately
    pub fn new(
        fields: Option<Fields>,
        reference: Option<Reference>,
        mode: ValidationMode,
    ) -> Result<Self, ForeignKeyError> {
        let mut fk = Self {
            fields,
            reference,
            mode,
            errors: Vec::new(),
        };
        fk.validate()?;
        Ok(fk)
    }

    /// Build a foreign key from its JSON descriptor.
    ///
    /// `reference` may be a string holding the reference descriptor as JSON
    /// text, or the descriptor object itself. The nested reference is built
    /// with the same mode as the key.
    pub fn from_value(value: &Value, mode: ValidationMode) -> Result<Self, ParseError> {
        let fields = value.get(JSON_KEY_FIELDS).map(Fields::from_value);
        let reference = match value.get(JSON_KEY_REFERENCE) {
            Some(Value::String(text)) => Some(Reference::from_json(text, mode)?),
            Some(descriptor) => Some(Reference::from_value(descriptor, mode)?),
            None => None,
        };

        Ok(Self::new(fields, reference, mode)?)
    }

    /// Parse a foreign key from JSON text.
    pub fn from_json(json: &str, mode: ValidationMode) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value, mode)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// Set the local field(s). Does not re-validate.
    pub fn set_fields(&mut self, fields: impl Into<Fields>) {
        self.fields = Some(fields.into());
    }

    pub fn clear_fields(&mut self) {
        self.fields = None;
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    pub fn reference_mut(&mut self) -> Option<&mut Reference> {
        self.reference.as_mut()
    }

    /// Set the reference. Does not re-validate.
    pub fn set_reference(&mut self, reference: Reference) {
        self.reference = Some(reference);
    }

    /// Remove and return the reference
    pub fn take_reference(&mut self) -> Option<Reference> {
        self.reference.take()
    }

    /// Errors recorded by lenient validation, in the order they occurred
    pub fn errors(&self) -> &[ForeignKeyError] {
        &self.errors
    }

    /// Evaluate the validation rules without recording anything
    pub fn check(&self) -> Result<(), ForeignKeyError> {
        validate_foreign_key(self.fields(), self.reference())
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Validate according to the key's mode.
    ///
    /// Strict: the violation is returned. Lenient: the violation is recorded
    /// and `Ok(())` is returned. At most one violation is produced per call.
    pub fn validate(&mut self) -> Result<(), ForeignKeyError> {
        match self.check() {
            Ok(()) => {
                trace!("Foreign key is valid");
                Ok(())
            }
            Err(e) if self.mode.is_strict() => Err(e),
            Err(e) => {
                debug!(error = %e, "Recorded foreign key validation error");
                self.errors.push(e);
                Ok(())
            }
        }
    }

    /// JSON descriptor with the reference embedded as an object
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference(fields: impl Into<Fields>) -> Reference {
        Reference::new(
            Some("aResource".to_string()),
            Some(fields.into()),
            ValidationMode::Strict,
        )
        .unwrap()
    }

    #[test]
    fn test_with_mode_is_empty() {
        let fk = ForeignKey::with_mode(ValidationMode::Strict);
        assert_eq!(fk.mode(), ValidationMode::Strict);
        assert!(fk.fields().is_none());
        assert!(fk.reference().is_none());
        assert!(fk.errors().is_empty());
    }

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(ForeignKey::default().mode(), ValidationMode::Lenient);
    }

    #[test]
    fn test_lenient_new_records_error() {
        let fk = ForeignKey::new(
            Some("a".into()),
            Some(reference(vec!["x", "y"])),
            ValidationMode::Lenient,
        )
        .unwrap();
        assert_eq!(fk.errors(), &[ForeignKeyError::ReferenceFieldsNotString]);
        assert!(!fk.is_valid());
    }

    #[test]
    fn test_check_does_not_record() {
        let fk = ForeignKey::default();
        assert_eq!(fk.check(), Err(ForeignKeyError::MissingProperties));
        assert!(fk.errors().is_empty());
    }

    #[test]
    fn test_reference_mut_edits_in_place() {
        let mut fk = ForeignKey::new(
            Some("a".into()),
            Some(reference("b")),
            ValidationMode::Strict,
        )
        .unwrap();
        if let Some(reference) = fk.reference_mut() {
            reference.set_fields(vec!["b", "c"]);
        }
        assert_eq!(fk.validate(), Err(ForeignKeyError::ReferenceFieldsNotString));
    }

    #[test]
    fn test_cleared_members_are_missing() {
        let mut fk = ForeignKey::new(
            Some("a".into()),
            Some(reference("b")),
            ValidationMode::Lenient,
        )
        .unwrap();

        fk.clear_fields();
        fk.validate().unwrap();

        fk.set_fields("a");
        let taken = fk.take_reference();
        assert_eq!(taken.as_ref().and_then(Reference::resource), Some("aResource"));
        fk.validate().unwrap();

        assert_eq!(
            fk.errors(),
            &[
                ForeignKeyError::MissingProperties,
                ForeignKeyError::MissingProperties,
            ]
        );
    }

    #[test]
    fn test_null_fields_are_not_written() {
        let value = json!({
            "fields": null,
            "reference": {"resource": "r", "fields": "f"}
        });
        let fk = ForeignKey::from_value(&value, ValidationMode::Lenient).unwrap();
        assert_eq!(fk.errors(), &[ForeignKeyError::InvalidFieldsType]);
        assert_eq!(
            fk.to_json().unwrap(),
            json!({"reference": {"resource": "r", "fields": "f"}})
        );
    }

    #[test]
    fn test_array_of_non_names_reports_names() {
        let json = r#"{"fields": [1, 2], "reference": {"resource": "r", "fields": ["a", "b"]}}"#;
        let fk = ForeignKey::from_json(json, ValidationMode::Lenient).unwrap();
        assert_eq!(fk.errors(), &[ForeignKeyError::InvalidFieldName]);
        assert_eq!(
            fk.errors()[0].to_string(),
            "The foreign key's fields array must contain only field names."
        );
    }

    #[test]
    fn test_from_value_with_embedded_text() {
        let value = json!({
            "fields": "customer_id",
            "reference": "{\"resource\": \"customers\", \"fields\": \"id\"}"
        });
        let fk = ForeignKey::from_value(&value, ValidationMode::Strict).unwrap();
        assert_eq!(fk.fields(), Some(&Fields::from("customer_id")));
        assert_eq!(
            fk.reference().and_then(Reference::resource),
            Some("customers")
        );
    }

    #[test]
    fn test_from_value_with_embedded_object() {
        let value = json!({
            "fields": ["a", "b"],
            "reference": {"resource": "other", "fields": ["c", "d"]}
        });
        let fk = ForeignKey::from_value(&value, ValidationMode::Strict).unwrap();
        assert!(fk.is_valid());
    }

    #[test]
    fn test_malformed_reference_text_fails_parse() {
        let value = json!({"fields": "a", "reference": "{not json"});
        let result = ForeignKey::from_value(&value, ValidationMode::Lenient);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_to_json_embeds_reference_object() {
        let fk = ForeignKey::new(
            Some(vec!["a", "b"].into()),
            Some(reference(vec!["c", "d"])),
            ValidationMode::Strict,
        )
        .unwrap();
        assert_eq!(
            fk.to_json().unwrap(),
            json!({
                "fields": ["a", "b"],
                "reference": {"resource": "aResource", "fields": ["c", "d"]}
            })
        );
    }

    #[test]
    fn test_to_json_omits_absent_members() {
        assert_eq!(ForeignKey::default().to_json().unwrap(), json!({}));
    }
}

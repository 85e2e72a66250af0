//! Reference model: the target side of a foreign key

use super::fields::Fields;
use crate::validation::error::{ForeignKeyError, ParseError};
use crate::validation::foreign_keys::validate_reference;
use crate::validation::ValidationMode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

const JSON_KEY_DATAPACKAGE: &str = "datapackage";
const JSON_KEY_RESOURCE: &str = "resource";
const JSON_KEY_FIELDS: &str = "fields";

/// The table and fields a foreign key points at.
///
/// The referenced table may live in another data package, identified by an
/// absolute URL.
///
/// # Example
///
/// ```rust
/// use tableschema_fk::models::Reference;
/// use tableschema_fk::validation::ValidationMode;
///
/// let reference = Reference::new(
///     Some("customers".to_string()),
///     Some("id".into()),
///     ValidationMode::Strict,
/// )
/// .unwrap();
/// assert_eq!(reference.resource(), Some("customers"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reference {
    /// Location of the data package holding the referenced resource
    #[serde(skip_serializing_if = "Option::is_none")]
    datapackage: Option<Url>,
    /// Name of the referenced resource
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    /// Referenced field name(s)
    #[serde(skip_serializing_if = "crate::models::fields::is_omitted")]
    fields: Option<Fields>,
}

impl Reference {
    /// Create a reference to a resource in the same data package.
    ///
    /// In strict mode the reference is validated before it is returned;
    /// otherwise validation is left to an explicit [`Reference::validate`] call.
    pub fn new(
        resource: Option<String>,
        fields: Option<Fields>,
        mode: ValidationMode,
    ) -> Result<Self, ForeignKeyError> {
        Self::with_datapackage(None, resource, fields, mode)
    }

    /// Create a reference to a resource in another data package.
    pub fn with_datapackage(
        datapackage: Option<Url>,
        resource: Option<String>,
        fields: Option<Fields>,
        mode: ValidationMode,
    ) -> Result<Self, ForeignKeyError> {
        let reference = Self {
            datapackage,
            resource,
            fields,
        };
        if mode.is_strict() {
            reference.validate()?;
        }
        Ok(reference)
    }

    /// Build a reference from its JSON descriptor.
    ///
    /// A `datapackage` that is not an absolute URL is dropped rather than
    /// reported. Input that is not a JSON object yields an empty reference.
    pub fn from_value(value: &Value, mode: ValidationMode) -> Result<Self, ForeignKeyError> {
        let datapackage = value.get(JSON_KEY_DATAPACKAGE).and_then(parse_datapackage);
        let resource = value
            .get(JSON_KEY_RESOURCE)
            .and_then(Value::as_str)
            .map(str::to_string);
        let fields = value.get(JSON_KEY_FIELDS).map(Fields::from_value);

        Self::with_datapackage(datapackage, resource, fields, mode)
    }

    /// Parse a reference from JSON text.
    pub fn from_json(json: &str, mode: ValidationMode) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value, mode)?)
    }

    pub fn datapackage(&self) -> Option<&Url> {
        self.datapackage.as_ref()
    }

    pub fn set_datapackage(&mut self, datapackage: Option<Url>) {
        self.datapackage = datapackage;
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Set the resource name. Does not re-validate.
    pub fn set_resource(&mut self, resource: impl Into<String>) {
        self.resource = Some(resource.into());
    }

    pub fn clear_resource(&mut self) {
        self.resource = None;
    }

    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// Set the referenced field(s). Does not re-validate.
    pub fn set_fields(&mut self, fields: impl Into<Fields>) {
        self.fields = Some(fields.into());
    }

    pub fn clear_fields(&mut self) {
        self.fields = None;
    }

    /// Check that `resource` and `fields` are present and well shaped.
    ///
    /// References have no lenient mode: a violation is always returned.
    pub fn validate(&self) -> Result<(), ForeignKeyError> {
        validate_reference(self.resource(), self.fields())?;
        Ok(())
    }

    /// JSON descriptor, omitting absent members
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn parse_datapackage(value: &Value) -> Option<Url> {
    let Some(text) = value.as_str() else {
        debug!(value = %value, "Ignoring non-string datapackage");
        return None;
    };
    match Url::parse(text) {
        Ok(url) => Some(url),
        Err(e) => {
            debug!(datapackage = text, error = %e, "Ignoring malformed datapackage URL");
            None
        }
    }
}

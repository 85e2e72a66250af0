//! Field name lists used on both sides of a foreign key

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One field name or an ordered list of field names.
///
/// Descriptors read from JSON may carry a `fields` value of some other shape.
/// Such input is kept as [`Fields::Unsupported`], and arrays holding
/// something other than names as [`Fields::MixedSequence`], so that
/// validation, not parsing, reports it.
///
/// # Example
///
/// ```rust
/// use tableschema_fk::models::Fields;
///
/// let single = Fields::from("id");
/// assert_eq!(single.as_single(), Some("id"));
///
/// let composite = Fields::from(vec!["first_name", "last_name"]);
/// assert_eq!(composite.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields {
    /// A single field name
    Single(String),
    /// An ordered list of field names
    Sequence(Vec<String>),
    /// An array with at least one element that is not a string
    MixedSequence(Vec<Value>),
    /// Any other JSON shape
    Unsupported(Value),
}

impl Fields {
    /// Classify a JSON value.
    ///
    /// Strings become `Single`. Arrays become `Sequence` when every element
    /// is a string and `MixedSequence` otherwise. Everything else is
    /// `Unsupported`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(name) => Fields::Single(name.clone()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(Fields::Sequence)
                .unwrap_or_else(|| Fields::MixedSequence(items.clone())),
            other => Fields::Unsupported(other.clone()),
        }
    }

    /// JSON form of this value
    pub fn to_value(&self) -> Value {
        match self {
            Fields::Single(name) => Value::String(name.clone()),
            Fields::Sequence(names) => {
                Value::Array(names.iter().cloned().map(Value::String).collect())
            }
            Fields::MixedSequence(items) => Value::Array(items.clone()),
            Fields::Unsupported(value) => value.clone(),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Fields::Single(name) => Some(name),
            _ => None,
        }
    }

    /// Field names, when this is an array made only of names
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Fields::Sequence(names) => Some(names),
            _ => None,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Fields::Single(_))
    }

    /// Whether this is array-shaped, whatever its elements are
    pub fn is_sequence(&self) -> bool {
        matches!(self, Fields::Sequence(_) | Fields::MixedSequence(_))
    }

    /// Whether this is a string or an array
    pub fn is_supported(&self) -> bool {
        !matches!(self, Fields::Unsupported(_))
    }

    /// Number of entries: 1 for a single name, the element count for arrays,
    /// zero for unsupported shapes
    pub fn len(&self) -> usize {
        match self {
            Fields::Single(_) => 1,
            Fields::Sequence(names) => names.len(),
            Fields::MixedSequence(items) => items.len(),
            Fields::Unsupported(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serde predicate for descriptor members: absent fields and a parsed JSON
/// `null` are both left out of the output.
pub(crate) fn is_omitted(fields: &Option<Fields>) -> bool {
    matches!(fields, None | Some(Fields::Unsupported(Value::Null)))
}

impl From<&str> for Fields {
    fn from(name: &str) -> Self {
        Fields::Single(name.to_string())
    }
}

impl From<String> for Fields {
    fn from(name: String) -> Self {
        Fields::Single(name)
    }
}

impl From<Vec<String>> for Fields {
    fn from(names: Vec<String>) -> Self {
        Fields::Sequence(names)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(names: Vec<&str>) -> Self {
        Fields::Sequence(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Fields {
    fn from(names: &[&str]) -> Self {
        Fields::Sequence(names.iter().map(|name| name.to_string()).collect())
    }
}

impl From<Value> for Fields {
    fn from(value: Value) -> Self {
        Fields::from_value(&value)
    }
}

impl Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Fields::Single(name) => serializer.serialize_str(name),
            Fields::Sequence(names) => names.serialize(serializer),
            Fields::MixedSequence(items) => items.serialize(serializer),
            Fields::Unsupported(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Fields::from_value(&value))
    }
}

//! Validation mode configuration

use serde::{Deserialize, Serialize};

/// How validation failures are surfaced.
///
/// `Strict` fails the triggering call. `Lenient` lets the call succeed and,
/// for foreign keys, records the failure so the caller can inspect it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Fail fast on the first violation
    Strict,
    /// Collect violations instead of failing
    #[default]
    Lenient,
}

impl ValidationMode {
    /// Whether failures should be returned as errors immediately
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

impl From<bool> for ValidationMode {
    fn from(strict: bool) -> Self {
        if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(ValidationMode::default(), ValidationMode::Lenient);
        assert!(!ValidationMode::default().is_strict());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(ValidationMode::from(true), ValidationMode::Strict);
        assert_eq!(ValidationMode::from(false), ValidationMode::Lenient);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ValidationMode::Strict).unwrap();
        assert_eq!(json, "\"strict\"");

        let mode: ValidationMode = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(mode, ValidationMode::Lenient);
    }
}

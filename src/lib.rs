//! Table Schema foreign keys
//!
//! Provides:
//! - Parsing of foreign key and reference descriptors from JSON
//! - Structural validation in strict (fail-fast) or lenient (collecting) mode
//! - Serialization back to JSON descriptors

pub mod models;
pub mod validation;

pub use models::{Fields, ForeignKey, Reference};
pub use validation::{ForeignKeyError, ParseError, ReferenceError, ValidationMode};

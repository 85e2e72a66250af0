//! Validation functionality
//!
//! Provides validation logic for:
//! - Reference shape (resource and fields present and well formed)
//! - Foreign key shape (fields present, consistent with the reference)

pub mod config;
pub mod error;
pub mod foreign_keys;

pub use config::ValidationMode;
pub use error::{ForeignKeyError, ParseError, ReferenceError};
pub use foreign_keys::{validate_foreign_key, validate_reference};

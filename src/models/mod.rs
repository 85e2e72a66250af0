//! Models module for foreign key descriptors
//!
//! Defines the two value types of a foreign key declaration and the field
//! list they share.

pub mod fields;
pub mod foreign_key;
pub mod reference;

pub use fields::Fields;
pub use foreign_key::ForeignKey;
pub use reference::Reference;

//! Core type definitions for the promotion core.
//!
//! This crate defines the value types every other crate keys its maps on:
//! - Item, field and relationship identifiers (UUID)
//! - Variant coordinates (language, version) and the identifier triple
//! - Variant locators and the item URI parser
//!
//! Content records themselves (variants, fields, relationships) live in
//! `promote-model`.

mod ids;
mod locator;
mod variant;

pub use ids::{FieldId, ItemId, RelationshipId};
pub use locator::{LocatorParser, UriLocatorParser, LOCATOR_SCHEME};
pub use variant::{Language, VariantIdentifier, VariantLocator, Version};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid locator: {0}")]
    InvalidLocator(String),
}

//! Read-side storage for the promotion core.
//!
//! Defines the repository contracts the de-cloning core depends on and ships
//! an in-memory implementation of each.
//!
//! # Architecture
//!
//! - [`VariantRepository`] serves batched variant reads by locator
//! - [`RelationshipRepository`] serves batched outgoing-relationship reads
//! - [`InMemoryVariantStore`] / [`InMemoryRelationshipStore`] hold one store's
//!   content in memory and record every batch they serve
//! - [`SourceSnapshot`] loads that content from JSON
//!
//! Repositories never report "not found": unknown identifiers are simply
//! omitted. Errors are reserved for the store itself failing.

mod error;
mod memory;
mod repository;
mod snapshot;

pub use error::{StorageError, StorageResult};
pub use memory::{InMemoryRelationshipStore, InMemoryVariantStore};
pub use repository::{RelationshipMap, RelationshipRepository, VariantRepository};
pub use snapshot::{SourceSnapshot, VariantRelationships};

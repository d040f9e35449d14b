//! Content model for the promotion core.
//!
//! Defines the read-only records the de-cloning core consumes and produces:
//! - [`Variant`]: one language/version instance of an item with its fields
//! - [`Field`]: a raw field value plus its [`VarianceInfo`] provenance
//! - [`Relationship`]: an outgoing edge from a field to another item
//! - the clone-linkage field identities in [`clones`]
//!
//! All types are plain serde-serializable data. They form the contract
//! between the repositories that load them and the pipeline that writes them
//! to a target store.

pub mod clones;
mod field;
mod relationship;
mod variant;

pub use field::{Field, VarianceInfo, VarianceType};
pub use relationship::{Relationship, RelationshipType};
pub use variant::{ItemProperties, Variant};

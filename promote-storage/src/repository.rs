//! Read-side repository contracts consumed by the de-cloning core.

use crate::StorageResult;
use async_trait::async_trait;
use promote_model::{Relationship, Variant};
use promote_types::{VariantIdentifier, VariantLocator};
use std::collections::HashMap;

/// Outgoing relationships keyed by the variant they originate from.
pub type RelationshipMap = HashMap<VariantIdentifier, Vec<Relationship>>;

/// Batched read access to variants.
#[async_trait]
pub trait VariantRepository: Send + Sync {
    /// Fetches the variants named by `locators` in one call.
    ///
    /// Unknown locators are omitted from the result, never reported as
    /// errors. The result order is unspecified.
    async fn get_variants(&self, locators: &[VariantLocator]) -> StorageResult<Vec<Variant>>;
}

/// Batched read access to outgoing relationships.
#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// Fetches the outgoing relationships of every variant in `identifiers`
    /// from the store named `store`.
    ///
    /// Variants with no relationships are absent from the map.
    async fn get_out_relationships(
        &self,
        store: &str,
        identifiers: &[VariantIdentifier],
    ) -> StorageResult<RelationshipMap>;
}

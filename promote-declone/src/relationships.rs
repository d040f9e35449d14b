//! Relationship loading for clones and their ancestors.

use promote_model::Relationship;
use promote_storage::{RelationshipMap, RelationshipRepository, StorageResult};
use promote_types::VariantIdentifier;
use std::collections::HashSet;
use tracing::debug;

/// Fetches the outgoing relationships of every identity in one call.
///
/// Identities are deduplicated, keeping first-seen order. An empty set skips
/// the repository entirely.
pub async fn load_relationships(
    repository: &dyn RelationshipRepository,
    store: &str,
    identities: impl IntoIterator<Item = VariantIdentifier>,
) -> StorageResult<RelationshipMap> {
    let mut seen = HashSet::new();
    let identities: Vec<VariantIdentifier> = identities
        .into_iter()
        .filter(|ident| seen.insert(ident.clone()))
        .collect();

    if identities.is_empty() {
        return Ok(RelationshipMap::new());
    }

    let relationships = repository.get_out_relationships(store, &identities).await?;
    debug!(
        "Loaded relationships for {} of {} variants from {}",
        relationships.len(),
        identities.len(),
        store
    );
    Ok(relationships)
}

/// Relationships of `ident`; absent means none.
pub fn relationships_of<'a>(
    relationships: &'a RelationshipMap,
    ident: &VariantIdentifier,
) -> &'a [Relationship] {
    relationships.get(ident).map(Vec::as_slice).unwrap_or(&[])
}

//! Chain merge: flattens a clone chain into one materialized variant.
//!
//! Fields are taken nearest-first: the clone's own values, then each
//! ancestor's values for fields nobody nearer has set. Inherited fields are
//! rewritten to belong to the clone, and every relationship that hung off an
//! inherited field is re-created on the clone with a fresh identity.

use crate::chain::CloneChain;
use crate::relationships::relationships_of;
use promote_model::clones::is_clone_link;
use promote_model::{Field, Relationship, Variant};
use promote_storage::RelationshipMap;
use promote_types::RelationshipId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A de-cloned variant and the relationships to publish with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclonedVariant {
    pub variant: Variant,
    pub relationships: Vec<Relationship>,
}

/// What a merge contributed beyond the clone's own data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Ancestors in the chain.
    pub ancestors: usize,
    /// Fields copied from ancestors.
    pub inherited_fields: usize,
    /// Relationships re-created from ancestors.
    pub inherited_relationships: usize,
}

impl MergeStats {
    /// Accumulates another merge's counts.
    pub fn add(&mut self, other: &MergeStats) {
        self.ancestors += other.ancestors;
        self.inherited_fields += other.inherited_fields;
        self.inherited_relationships += other.inherited_relationships;
    }
}

/// Merges `chain` into one variant. See [`merge_chain_with_stats`].
pub fn merge_chain(chain: &CloneChain, relationships: &RelationshipMap) -> DeclonedVariant {
    merge_chain_with_stats(chain, relationships).0
}

/// Merges `chain` into one variant and reports what was inherited.
///
/// The result keeps the clone's identity, coordinates, timestamps and
/// properties. Clone-linkage fields, and relationships originating in them,
/// never appear in it.
pub fn merge_chain_with_stats(
    chain: &CloneChain,
    relationships: &RelationshipMap,
) -> (DeclonedVariant, MergeStats) {
    let clone = chain.clone_variant();
    let clone_ident = clone.identifier();
    let mut stats = MergeStats {
        ancestors: chain.ancestors().len(),
        ..Default::default()
    };

    let mut seen = HashSet::new();
    let mut fields: Vec<Field> = clone
        .fields
        .iter()
        .filter(|f| !is_clone_link(f.field_id) && seen.insert(f.field_id))
        .cloned()
        .collect();

    let mut merged_relationships: Vec<Relationship> = relationships_of(relationships, &clone_ident)
        .iter()
        .filter(|r| !r.source_field_id.is_some_and(is_clone_link))
        .cloned()
        .collect();

    for ancestor in chain.ancestors() {
        let ancestor_relationships = relationships_of(relationships, &ancestor.identifier());

        for field in &ancestor.fields {
            if is_clone_link(field.field_id) || !seen.insert(field.field_id) {
                continue;
            }

            let inherited = Field::new(
                field.field_id,
                clone.id,
                field.raw_value.clone(),
                field.variance.rebased(&clone_ident),
            );

            let before = merged_relationships.len();
            merged_relationships.extend(
                ancestor_relationships
                    .iter()
                    .filter(|r| r.originates_in(field.field_id))
                    .map(|r| Relationship {
                        id: RelationshipId::new(),
                        source_id: clone.id,
                        source_field_id: r.source_field_id,
                        target_id: r.target_id,
                        target_path: r.target_path.clone(),
                        target_variance: r.target_variance.clone(),
                        relationship_type: r.relationship_type,
                        variance: inherited.variance.clone(),
                    }),
            );

            stats.inherited_relationships += merged_relationships.len() - before;
            stats.inherited_fields += 1;
            fields.push(inherited);
        }
    }

    debug!(
        "Merged {} across {} ancestors: {} inherited fields, {} inherited relationships",
        clone_ident, stats.ancestors, stats.inherited_fields, stats.inherited_relationships
    );

    let variant = Variant {
        id: clone.id,
        language: clone.language.clone(),
        version: clone.version,
        revision: clone.revision,
        base_last_modified: clone.base_last_modified,
        variant_last_modified: clone.variant_last_modified,
        properties: clone.properties.clone(),
        fields,
    };

    (
        DeclonedVariant {
            variant,
            relationships: merged_relationships,
        },
        stats,
    )
}

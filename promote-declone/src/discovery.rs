//! Ancestor discovery: fetches every clone source, level by level.
//!
//! All chains advance together: each round collects the unresolved sources of
//! the current frontier into one batch, so the number of repository calls is
//! bounded by the depth of the deepest chain, not by the number of clones.

use crate::source::clone_source;
use promote_model::Variant;
use promote_storage::{StorageResult, VariantRepository};
use promote_types::{LocatorParser, VariantIdentifier, VariantLocator};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Every ancestor found for a batch of clones, keyed by identity.
pub type AncestorMap = HashMap<VariantIdentifier, Variant>;

/// Fetches the ancestors of `clones` up to and including each chain's first
/// non-clone root.
///
/// Each distinct identity is requested at most once per call, which also
/// makes the loop terminate on cyclic references. Sources that do not parse
/// or are not returned by the repository end their branch silently.
pub async fn discover_ancestors(
    repository: &dyn VariantRepository,
    parser: &dyn LocatorParser,
    store: &str,
    clones: &[Variant],
) -> StorageResult<AncestorMap> {
    let mut ancestors = AncestorMap::new();
    let mut batch = unresolved_sources(clones.iter(), &ancestors, parser, store);
    let mut level = 0usize;

    while !batch.is_empty() {
        level += 1;
        let fetched = repository.get_variants(&batch).await?;
        let fetched_count = fetched.len();

        let mut frontier = Vec::new();
        for variant in fetched {
            let ident = variant.identifier();
            if ancestors.contains_key(&ident) {
                continue;
            }
            if variant.is_clone() {
                frontier.push(ident.clone());
            }
            ancestors.insert(ident, variant);
        }

        debug!(
            "Clone discovery level {}: requested {}, fetched {}, {} still cloned",
            level,
            batch.len(),
            fetched_count,
            frontier.len()
        );

        batch = unresolved_sources(
            frontier.iter().filter_map(|ident| ancestors.get(ident)),
            &ancestors,
            parser,
            store,
        );
    }

    Ok(ancestors)
}

/// Sources of `variants` not yet in `ancestors`, deduplicated, first-seen order.
fn unresolved_sources<'a>(
    variants: impl Iterator<Item = &'a Variant>,
    ancestors: &AncestorMap,
    parser: &dyn LocatorParser,
    store: &str,
) -> Vec<VariantLocator> {
    let mut seen = HashSet::new();
    variants
        .filter_map(|v| clone_source(v, parser, store))
        .filter(|l| !ancestors.contains_key(&l.identifier))
        .filter(|l| seen.insert(l.identifier.clone()))
        .collect()
}

//! Clone chains: the ordered ancestry of one clone.

use crate::discovery::AncestorMap;
use crate::source::clone_source;
use promote_model::Variant;
use promote_types::LocatorParser;
use std::collections::HashSet;
use tracing::{debug, warn};

/// `[clone, parent, grandparent, ..., root]`.
///
/// Never empty, and never holds the same variant identity twice.
#[derive(Debug, Clone, PartialEq)]
pub struct CloneChain {
    variants: Vec<Variant>,
}

impl CloneChain {
    /// Starts a chain at `clone`.
    pub fn new(clone: Variant) -> Self {
        Self {
            variants: vec![clone],
        }
    }

    /// The clone being materialized.
    pub fn clone_variant(&self) -> &Variant {
        &self.variants[0]
    }

    /// Ancestors, nearest first.
    pub fn ancestors(&self) -> &[Variant] {
        &self.variants[1..]
    }

    /// All variants, clone first.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Number of variants including the clone.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if the chain holds no variants (never: a chain starts at its clone).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The last variant in the chain.
    pub fn root(&self) -> &Variant {
        &self.variants[self.variants.len() - 1]
    }
}

/// Builds one chain per clone, preserving input order.
pub fn build_chains(
    clones: &[Variant],
    ancestors: &AncestorMap,
    parser: &dyn LocatorParser,
    store: &str,
) -> Vec<CloneChain> {
    clones
        .iter()
        .map(|clone| build_chain(clone, ancestors, parser, store))
        .collect()
}

/// Walks source references from `clone` through `ancestors`.
///
/// Stops at the first variant without a resolvable source, at a source that
/// was never fetched, or before revisiting an identity already in the chain.
pub fn build_chain(
    clone: &Variant,
    ancestors: &AncestorMap,
    parser: &dyn LocatorParser,
    store: &str,
) -> CloneChain {
    let mut chain = CloneChain::new(clone.clone());
    let mut visited = HashSet::from([clone.identifier()]);
    let mut current = clone;

    while let Some(source) = clone_source(current, parser, store) {
        let Some(parent) = ancestors.get(&source.identifier) else {
            debug!(
                "Clone source {} of {} not found; chain ends",
                source.identifier,
                current.identifier()
            );
            break;
        };
        if !visited.insert(source.identifier.clone()) {
            warn!(
                "Clone cycle detected at {} while resolving {}; chain ends",
                source.identifier,
                clone.identifier()
            );
            break;
        }
        chain.variants.push(parent.clone());
        current = parent;
    }

    chain
}

//! Clone manifest promoter: de-clones a batch of clone locators.
//!
//! The promoter runs the four phases in order, awaiting repository calls
//! between them:
//!
//! 1. fetch the clones and discover their ancestors level by level
//! 2. build one chain per clone
//! 3. load relationships for clones and ancestors in one call
//! 4. merge each chain, inline or on blocking worker tasks
//!
//! Output order follows the input locators.

use crate::chain::{build_chains, CloneChain};
use crate::config::PromoterOptions;
use crate::discovery::discover_ancestors;
use crate::error::{DecloneError, DecloneResult};
use crate::merge::{merge_chain_with_stats, DeclonedVariant, MergeStats};
use crate::relationships::load_relationships;
use promote_model::Variant;
use promote_storage::{RelationshipMap, RelationshipRepository, VariantRepository};
use promote_types::{LocatorParser, UriLocatorParser, VariantIdentifier, VariantLocator};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stores involved in one promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPromoteContext {
    /// Store the clones and their ancestors are read from.
    pub source_store: String,
    /// Store the de-cloned variants will be written to.
    pub target_store: String,
}

impl TargetPromoteContext {
    pub fn new(source_store: impl Into<String>, target_store: impl Into<String>) -> Self {
        Self {
            source_store: source_store.into(),
            target_store: target_store.into(),
        }
    }
}

/// Materializes clone variants for publishing.
pub struct CloneManifestPromoter {
    options: PromoterOptions,
    parser: Arc<dyn LocatorParser>,
}

impl CloneManifestPromoter {
    /// Creates a promoter using the item URI parser.
    pub fn new(options: PromoterOptions) -> Self {
        Self::with_parser(options, Arc::new(UriLocatorParser))
    }

    /// Creates a promoter with a custom locator parser.
    pub fn with_parser(options: PromoterOptions, parser: Arc<dyn LocatorParser>) -> Self {
        Self { options, parser }
    }

    /// Returns the options.
    pub fn options(&self) -> &PromoterOptions {
        &self.options
    }

    /// De-clones the variants named by `clone_locators`.
    ///
    /// Returns one entry per locator whose clone exists in the source store,
    /// in locator order. Repository failures abort the whole batch.
    pub async fn declone_variants(
        &self,
        context: &TargetPromoteContext,
        item_repository: &dyn VariantRepository,
        relationship_repository: &dyn RelationshipRepository,
        clone_locators: &[VariantLocator],
    ) -> DecloneResult<Vec<DeclonedVariant>> {
        if clone_locators.is_empty() {
            return Ok(Vec::new());
        }
        let store = context.source_store.as_str();
        let parser = self.parser.as_ref();

        let clones = self.fetch_clones(item_repository, clone_locators).await?;
        let ancestors = discover_ancestors(item_repository, parser, store, &clones).await?;
        let chains = build_chains(&clones, &ancestors, parser, store);

        let mut ancestor_ids: Vec<VariantIdentifier> = ancestors.keys().cloned().collect();
        ancestor_ids.sort();
        let identities = clone_locators
            .iter()
            .map(|l| l.identifier.clone())
            .chain(ancestor_ids);
        let relationships = load_relationships(relationship_repository, store, identities).await?;

        let merged = self.merge_all(chains, relationships).await?;

        let mut totals = MergeStats::default();
        let results: Vec<DeclonedVariant> = merged
            .into_iter()
            .map(|(declone, stats)| {
                totals.add(&stats);
                declone
            })
            .collect();

        info!(
            "De-cloned {} of {} variants from {} for {} ({} ancestors, {} inherited fields, {} inherited relationships)",
            results.len(),
            clone_locators.len(),
            context.source_store,
            context.target_store,
            ancestors.len(),
            totals.inherited_fields,
            totals.inherited_relationships
        );
        Ok(results)
    }

    /// Fetches the clones and lines them up with the locators.
    async fn fetch_clones(
        &self,
        repository: &dyn VariantRepository,
        clone_locators: &[VariantLocator],
    ) -> DecloneResult<Vec<Variant>> {
        let fetched: HashMap<VariantIdentifier, Variant> = repository
            .get_variants(clone_locators)
            .await?
            .into_iter()
            .map(|v| (v.identifier(), v))
            .collect();

        let mut clones = Vec::with_capacity(clone_locators.len());
        for locator in clone_locators {
            match fetched.get(&locator.identifier) {
                Some(variant) => clones.push(variant.clone()),
                None => warn!("Clone {} not found in {}; skipped", locator.identifier, locator.store),
            }
        }
        Ok(clones)
    }

    async fn merge_all(
        &self,
        chains: Vec<CloneChain>,
        relationships: RelationshipMap,
    ) -> DecloneResult<Vec<(DeclonedVariant, MergeStats)>> {
        if !self.options.merges_in_parallel(chains.len()) {
            return Ok(chains
                .iter()
                .map(|chain| merge_chain_with_stats(chain, &relationships))
                .collect());
        }

        let chunk_size = self.options.chunk_size(chains.len());
        let relationships = Arc::new(relationships);
        let mut tasks = Vec::new();
        let mut chains = chains.into_iter().peekable();

        while chains.peek().is_some() {
            let chunk: Vec<CloneChain> = chains.by_ref().take(chunk_size).collect();
            let relationships = Arc::clone(&relationships);
            tasks.push(tokio::task::spawn_blocking(move || {
                chunk
                    .iter()
                    .map(|chain| merge_chain_with_stats(chain, &relationships))
                    .collect::<Vec<_>>()
            }));
        }

        debug!("Merging on {} tasks of up to {} chains", tasks.len(), chunk_size);
        let chunks = futures::future::try_join_all(tasks)
            .await
            .map_err(|e| DecloneError::MergeTask(e.to_string()))?;
        Ok(chunks.into_iter().flatten().collect())
    }
}

impl Default for CloneManifestPromoter {
    fn default() -> Self {
        Self::new(PromoterOptions::default())
    }
}

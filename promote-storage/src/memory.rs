//! In-memory repositories backed by a loaded snapshot of one source store.
//!
//! Both stores count and record the batches they are asked for, so callers
//! can assert on how many round trips a resolution took, and can be switched
//! into an unavailable state to exercise failure propagation.

use crate::repository::{RelationshipMap, RelationshipRepository, VariantRepository};
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use promote_model::{Relationship, Variant};
use promote_types::{VariantIdentifier, VariantLocator};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct VariantState {
    variants: HashMap<VariantIdentifier, Variant>,
    batches: Vec<Vec<VariantIdentifier>>,
    unavailable: Option<String>,
}

/// Variant repository holding every variant of one store in memory.
///
/// The store component of incoming locators is not checked: the repository
/// is already bound to its store.
#[derive(Debug)]
pub struct InMemoryVariantStore {
    name: String,
    state: RwLock<VariantState>,
}

impl InMemoryVariantStore {
    /// Creates an empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(VariantState::default()),
        }
    }

    /// Creates a store pre-populated with `variants`. Later duplicates of the
    /// same identifier replace earlier ones.
    pub fn with_variants(name: impl Into<String>, variants: impl IntoIterator<Item = Variant>) -> Self {
        let variants = variants
            .into_iter()
            .map(|v| (v.identifier(), v))
            .collect();
        Self {
            name: name.into(),
            state: RwLock::new(VariantState {
                variants,
                ..Default::default()
            }),
        }
    }

    /// Returns the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds or replaces a variant.
    pub async fn insert(&self, variant: Variant) {
        let mut state = self.state.write().await;
        state.variants.insert(variant.identifier(), variant);
    }

    /// Number of variants held.
    pub async fn len(&self) -> usize {
        self.state.read().await.variants.len()
    }

    /// Returns true if the store holds no variants.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.variants.is_empty()
    }

    /// Number of `get_variants` calls served so far.
    pub async fn fetch_calls(&self) -> usize {
        self.state.read().await.batches.len()
    }

    /// Identifiers requested by each `get_variants` call, in call order.
    pub async fn requested_batches(&self) -> Vec<Vec<VariantIdentifier>> {
        self.state.read().await.batches.clone()
    }

    /// Makes every subsequent call fail with `StorageError::Unavailable`
    /// (`Some(reason)`), or restores normal service (`None`).
    pub async fn set_unavailable(&self, reason: Option<String>) {
        self.state.write().await.unavailable = reason;
    }
}

#[async_trait]
impl VariantRepository for InMemoryVariantStore {
    async fn get_variants(&self, locators: &[VariantLocator]) -> StorageResult<Vec<Variant>> {
        let mut state = self.state.write().await;
        state
            .batches
            .push(locators.iter().map(|l| l.identifier.clone()).collect());

        if let Some(reason) = &state.unavailable {
            return Err(StorageError::Unavailable(reason.clone()));
        }

        let mut seen = HashSet::new();
        let found: Vec<Variant> = locators
            .iter()
            .filter(|l| seen.insert(&l.identifier))
            .filter_map(|l| state.variants.get(&l.identifier).cloned())
            .collect();

        debug!(
            "Store {} served {} of {} requested variants",
            self.name,
            found.len(),
            locators.len()
        );
        Ok(found)
    }
}

#[derive(Debug, Default)]
struct RelationshipState {
    relationships: RelationshipMap,
    batches: Vec<Vec<VariantIdentifier>>,
    unavailable: Option<String>,
}

/// Relationship repository holding the outgoing edges of one store.
#[derive(Debug)]
pub struct InMemoryRelationshipStore {
    name: String,
    state: RwLock<RelationshipState>,
}

impl InMemoryRelationshipStore {
    /// Creates an empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(RelationshipState::default()),
        }
    }

    /// Creates a store pre-populated with grouped relationships.
    pub fn with_relationships(
        name: impl Into<String>,
        groups: impl IntoIterator<Item = (VariantIdentifier, Vec<Relationship>)>,
    ) -> Self {
        let mut relationships = RelationshipMap::new();
        for (source, rels) in groups {
            relationships.entry(source).or_default().extend(rels);
        }
        Self {
            name: name.into(),
            state: RwLock::new(RelationshipState {
                relationships,
                ..Default::default()
            }),
        }
    }

    /// Returns the store name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an outgoing relationship of `source`.
    pub async fn insert(&self, source: VariantIdentifier, relationship: Relationship) {
        let mut state = self.state.write().await;
        state
            .relationships
            .entry(source)
            .or_default()
            .push(relationship);
    }

    /// Number of `get_out_relationships` calls served so far.
    pub async fn fetch_calls(&self) -> usize {
        self.state.read().await.batches.len()
    }

    /// Identifiers requested by each call, in call order.
    pub async fn requested_batches(&self) -> Vec<Vec<VariantIdentifier>> {
        self.state.read().await.batches.clone()
    }

    /// See [`InMemoryVariantStore::set_unavailable`].
    pub async fn set_unavailable(&self, reason: Option<String>) {
        self.state.write().await.unavailable = reason;
    }
}

#[async_trait]
impl RelationshipRepository for InMemoryRelationshipStore {
    async fn get_out_relationships(
        &self,
        store: &str,
        identifiers: &[VariantIdentifier],
    ) -> StorageResult<RelationshipMap> {
        let mut state = self.state.write().await;
        state.batches.push(identifiers.to_vec());

        if let Some(reason) = &state.unavailable {
            return Err(StorageError::Unavailable(reason.clone()));
        }
        if store != self.name {
            return Err(StorageError::UnknownStore(store.to_string()));
        }

        let found: RelationshipMap = identifiers
            .iter()
            .filter_map(|ident| {
                state
                    .relationships
                    .get(ident)
                    .filter(|rels| !rels.is_empty())
                    .map(|rels| (ident.clone(), rels.clone()))
            })
            .collect();

        debug!(
            "Store {} served relationships for {} of {} variants",
            self.name,
            found.len(),
            identifiers.len()
        );
        Ok(found)
    }
}

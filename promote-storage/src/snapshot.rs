//! JSON snapshots of a source store.
//!
//! A snapshot is the serialized content of one store: its variants and the
//! outgoing relationships of each variant. It is how fixtures and the CLI
//! feed the in-memory repositories.

use crate::memory::{InMemoryRelationshipStore, InMemoryVariantStore};
use crate::{StorageError, StorageResult};
use promote_model::{Relationship, Variant};
use promote_types::VariantIdentifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

fn default_store() -> String {
    "master".to_string()
}

/// Outgoing relationships of one variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRelationships {
    pub source: VariantIdentifier,
    pub relationships: Vec<Relationship>,
}

/// Serialized content of one source store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSnapshot {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub relationships: Vec<VariantRelationships>,
}

impl SourceSnapshot {
    /// Parses and validates a snapshot from JSON text.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Reads and validates a snapshot file.
    pub async fn load(path: &Path) -> StorageResult<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Checks that variant identities are unique and that no variant
    /// repeats a field.
    pub fn validate(&self) -> StorageResult<()> {
        let mut identities = HashSet::new();
        for variant in &self.variants {
            let ident = variant.identifier();
            let mut fields = HashSet::new();
            for field in &variant.fields {
                if !fields.insert(field.field_id) {
                    return Err(StorageError::InvalidData(format!(
                        "variant {ident} repeats field {}",
                        field.field_id
                    )));
                }
            }
            if !identities.insert(ident.clone()) {
                return Err(StorageError::InvalidData(format!(
                    "duplicate variant {ident}"
                )));
            }
        }
        Ok(())
    }

    /// Builds the in-memory repositories serving this snapshot.
    pub fn into_stores(self) -> (InMemoryVariantStore, InMemoryRelationshipStore) {
        let variants = InMemoryVariantStore::with_variants(self.store.clone(), self.variants);
        let relationships = InMemoryRelationshipStore::with_relationships(
            self.store,
            self.relationships
                .into_iter()
                .map(|group| (group.source, group.relationships)),
        );
        (variants, relationships)
    }
}

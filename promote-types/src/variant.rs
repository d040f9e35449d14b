//! Variant coordinates: language, version and the identifier triple.

use crate::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A content language code such as `en` or `da-DK`.
///
/// Compared exactly as stored; the authoring system is responsible for
/// canonical casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A numbered version of a language variant. Any `u32`, including 0, is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u32);

impl Version {
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one variant of an item: (item, language, version).
///
/// Equality and hashing are structural over the triple, so identifiers built
/// from different sources (a parsed locator, a fetched variant) collide in
/// maps exactly when they name the same variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariantIdentifier {
    pub id: ItemId,
    pub language: Language,
    pub version: Version,
}

impl VariantIdentifier {
    #[must_use]
    pub fn new(id: ItemId, language: impl Into<Language>, version: Version) -> Self {
        Self {
            id,
            language: language.into(),
            version,
        }
    }

    /// Addresses this variant in the given store.
    #[must_use]
    pub fn in_store(&self, store: impl Into<String>) -> VariantLocator {
        VariantLocator {
            store: store.into(),
            identifier: self.clone(),
        }
    }
}

impl fmt::Display for VariantIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}?lang={}&ver={}", self.id, self.language, self.version)
    }
}

/// A variant identifier plus the name of the store that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantLocator {
    pub store: String,
    pub identifier: VariantIdentifier,
}

impl VariantLocator {
    #[must_use]
    pub fn new(store: impl Into<String>, identifier: VariantIdentifier) -> Self {
        Self {
            store: store.into(),
            identifier,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &VariantIdentifier {
        &self.identifier
    }
}

impl fmt::Display for VariantLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", crate::LOCATOR_SCHEME, self.store, self.identifier)
    }
}

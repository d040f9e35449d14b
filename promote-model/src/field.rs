use promote_types::{FieldId, ItemId, Language, VariantIdentifier, Version};
use serde::{Deserialize, Serialize};

/// How a field's value varies across the variants of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceType {
    /// Shared by every language and version.
    Invariant,
    /// One value per language, shared across versions.
    LanguageVariant,
    /// One value per language and version.
    Variant,
}

/// Provenance of a field or relationship: the variance kind plus the
/// coordinates it was taken from.
///
/// `language` is set for `LanguageVariant` and `Variant`, `version` only for
/// `Variant`. The merge algorithm carries this through but never branches on
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VarianceInfo {
    pub variance_type: VarianceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

impl VarianceInfo {
    /// Variance of a shared (invariant) value.
    #[must_use]
    pub const fn invariant() -> Self {
        Self {
            variance_type: VarianceType::Invariant,
            language: None,
            version: None,
        }
    }

    /// Computes the coordinates of `variance_type` against a variant.
    #[must_use]
    pub fn for_variant(variance_type: VarianceType, variant: &VariantIdentifier) -> Self {
        let (language, version) = match variance_type {
            VarianceType::Invariant => (None, None),
            VarianceType::LanguageVariant => (Some(variant.language.clone()), None),
            VarianceType::Variant => (Some(variant.language.clone()), Some(variant.version)),
        };
        Self {
            variance_type,
            language,
            version,
        }
    }

    /// Same variance kind, coordinates taken from `variant`.
    #[must_use]
    pub fn rebased(&self, variant: &VariantIdentifier) -> Self {
        Self::for_variant(self.variance_type, variant)
    }
}

impl Default for VarianceInfo {
    fn default() -> Self {
        Self::invariant()
    }
}

/// One field's value on a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub field_id: FieldId,
    /// Item whose raw value this field currently reflects.
    pub owner_id: ItemId,
    pub raw_value: String,
    #[serde(default)]
    pub variance: VarianceInfo,
}

impl Field {
    #[must_use]
    pub fn new(
        field_id: FieldId,
        owner_id: ItemId,
        raw_value: impl Into<String>,
        variance: VarianceInfo,
    ) -> Self {
        Self {
            field_id,
            owner_id,
            raw_value: raw_value.into(),
            variance,
        }
    }

    /// True when the raw value is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw_value.trim().is_empty()
    }
}

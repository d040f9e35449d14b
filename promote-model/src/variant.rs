use crate::clones::is_clone_link;
use crate::Field;
use chrono::{DateTime, Utc};
use promote_types::{FieldId, ItemId, Language, VariantIdentifier, VariantLocator, Version};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Item-level metadata shared by every variant of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProperties {
    pub name: String,
    pub template_id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,
}

/// One language/version instance of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: ItemId,
    pub language: Language,
    pub version: Version,
    pub revision: Uuid,
    pub base_last_modified: DateTime<Utc>,
    pub variant_last_modified: DateTime<Utc>,
    pub properties: ItemProperties,
    /// Field values, unique by `field_id`.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Variant {
    /// The (item, language, version) triple of this variant.
    #[must_use]
    pub fn identifier(&self) -> VariantIdentifier {
        VariantIdentifier::new(self.id, self.language.clone(), self.version)
    }

    /// Addresses this variant in `store`.
    #[must_use]
    pub fn locator(&self, store: impl Into<String>) -> VariantLocator {
        self.identifier().in_store(store)
    }

    /// Looks up a field by identity.
    #[must_use]
    pub fn field(&self, field_id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// True if the variant carries a source-variant or source-item field.
    #[must_use]
    pub fn is_clone(&self) -> bool {
        self.fields.iter().any(|f| is_clone_link(f.field_id))
    }
}

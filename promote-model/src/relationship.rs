use crate::VarianceInfo;
use promote_types::{FieldId, ItemId, RelationshipId};
use serde::{Deserialize, Serialize};

/// Classification of a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Link field pointing at another item.
    ItemReference,
    /// Link field pointing at a media item.
    MediaReference,
    /// The clone points at its source.
    CloneOf,
    /// The item is created from a template.
    TemplatedBy,
    /// A template inherits from a base template.
    InheritsFrom,
    /// Standard values defaulting.
    DefaultedBy,
    /// Any other edge kind recorded by the link database.
    Other,
}

/// A directed edge from a field on a source variant to a target item.
///
/// `source_field_id` is `None` for edges that do not originate in a field
/// (template and inheritance edges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub source_id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_field_id: Option<FieldId>,
    pub target_id: ItemId,
    #[serde(default)]
    pub target_path: String,
    #[serde(default)]
    pub target_variance: VarianceInfo,
    pub relationship_type: RelationshipType,
    #[serde(default)]
    pub variance: VarianceInfo,
}

impl Relationship {
    /// True if this edge originates in the given field.
    #[must_use]
    pub fn originates_in(&self, field_id: FieldId) -> bool {
        self.source_field_id == Some(field_id)
    }
}

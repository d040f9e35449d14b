//! Reserved fields that link a clone to its source.
//!
//! These fields are plumbing, not content: they never appear on a de-cloned
//! variant and relationships originating in them are dropped.

use promote_types::FieldId;

/// Fully qualified locator of the source variant (`__Source`).
pub const SOURCE_VARIANT_FIELD: FieldId =
    FieldId::from_u128(0x1B86697D_60CA_4D80_83FB_7555A2E6CE1C);

/// Item-level locator of the source (`__Source Item`); combined with the
/// clone's own language and version to address the parent variant.
pub const SOURCE_ITEM_FIELD: FieldId =
    FieldId::from_u128(0x19B597D3_2EDD_4AE2_AEFE_4A94C7F10E31);

/// True for either clone-linkage field.
#[must_use]
pub fn is_clone_link(field_id: FieldId) -> bool {
    field_id == SOURCE_VARIANT_FIELD || field_id == SOURCE_ITEM_FIELD
}

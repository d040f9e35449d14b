use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use promote_model::clones::{is_clone_link, SOURCE_ITEM_FIELD, SOURCE_VARIANT_FIELD};
use promote_model::{Field, ItemProperties, VarianceInfo, Variant};
use promote_types::{FieldId, ItemId, Language, VariantIdentifier, Version};
use serde_json::json;

const TITLE: FieldId = FieldId::from_u128(0x75577384_3C97_45DA_A847_81B00500E250);

fn make_variant(fields: Vec<(FieldId, &str)>) -> Variant {
    let id = ItemId::from_u128(0xA);
    Variant {
        id,
        language: Language::new("en"),
        version: Version::new(1),
        revision: uuid::Uuid::from_u128(0xBEEF),
        base_last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        variant_last_modified: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        properties: ItemProperties {
            name: "home".to_string(),
            template_id: ItemId::from_u128(0x7),
            master_id: None,
            parent_id: None,
        },
        fields: fields
            .into_iter()
            .map(|(fid, value)| Field::new(fid, id, value, VarianceInfo::invariant()))
            .collect(),
    }
}

// ── Clone detection ──────────────────────────────────────────────

#[test]
fn plain_variant_is_not_a_clone() {
    let v = make_variant(vec![(TITLE, "Hello")]);
    assert!(!v.is_clone());
}

#[test]
fn source_variant_field_marks_clone() {
    let v = make_variant(vec![(TITLE, "Hello"), (SOURCE_VARIANT_FIELD, "x")]);
    assert!(v.is_clone());
}

#[test]
fn source_item_field_marks_clone_even_when_blank() {
    let v = make_variant(vec![(SOURCE_ITEM_FIELD, "")]);
    assert!(v.is_clone());
}

#[test]
fn clone_link_fields_are_recognised() {
    assert!(is_clone_link(SOURCE_VARIANT_FIELD));
    assert!(is_clone_link(SOURCE_ITEM_FIELD));
    assert!(!is_clone_link(TITLE));
}

#[test]
fn clone_link_constants_match_well_known_guids() {
    assert_eq!(
        SOURCE_VARIANT_FIELD,
        FieldId::parse("{1B86697D-60CA-4D80-83FB-7555A2E6CE1C}").unwrap()
    );
    assert_eq!(
        SOURCE_ITEM_FIELD,
        FieldId::parse("{19B597D3-2EDD-4AE2-AEFE-4A94C7F10E31}").unwrap()
    );
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn identifier_is_the_triple() {
    let v = make_variant(vec![]);
    assert_eq!(
        v.identifier(),
        VariantIdentifier::new(ItemId::from_u128(0xA), "en", Version::new(1))
    );
}

#[test]
fn locator_carries_store() {
    let v = make_variant(vec![]);
    let locator = v.locator("master");
    assert_eq!(locator.store, "master");
    assert_eq!(locator.identifier, v.identifier());
}

#[test]
fn field_lookup_by_id() {
    let v = make_variant(vec![(TITLE, "Hello")]);
    assert_eq!(v.field(TITLE).map(|f| f.raw_value.as_str()), Some("Hello"));
    assert!(v.field(SOURCE_ITEM_FIELD).is_none());
}

#[test]
fn blank_field_detection() {
    let id = ItemId::new();
    assert!(Field::new(TITLE, id, "  \t", VarianceInfo::invariant()).is_blank());
    assert!(!Field::new(TITLE, id, " x ", VarianceInfo::invariant()).is_blank());
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn variant_deserializes_from_snapshot_json() {
    let value = json!({
        "id": "00000000-0000-0000-0000-00000000000a",
        "language": "en",
        "version": 1,
        "revision": "00000000-0000-0000-0000-00000000beef",
        "base_last_modified": "2024-01-01T00:00:00Z",
        "variant_last_modified": "2024-02-01T00:00:00Z",
        "properties": {
            "name": "home",
            "template_id": "00000000-0000-0000-0000-000000000007"
        },
        "fields": [{
            "field_id": "75577384-3c97-45da-a847-81b00500e250",
            "owner_id": "00000000-0000-0000-0000-00000000000a",
            "raw_value": "Hello"
        }]
    });

    let parsed: Variant = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, make_variant(vec![(TITLE, "Hello")]));
}

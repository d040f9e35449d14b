#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use promote_declone::{build_chain, AncestorMap, CloneChain};
use promote_model::clones::{SOURCE_ITEM_FIELD, SOURCE_VARIANT_FIELD};
use promote_model::{
    Field, ItemProperties, Relationship, RelationshipType, VarianceInfo, VarianceType, Variant,
};
use promote_types::{
    FieldId, ItemId, Language, RelationshipId, UriLocatorParser, VariantIdentifier,
    VariantLocator, Version,
};

pub const STORE: &str = "master";

pub const TITLE: FieldId = FieldId::from_u128(0x75577384_3C97_45DA_A847_81B00500E250);
pub const BODY: FieldId = FieldId::from_u128(0xA60ACD61_A6DB_4182_8329_C957982CEC74);
pub const LINK: FieldId = FieldId::from_u128(0x0E1C6A22_5B7E_4C04_9D5C_2B8B0A0B0C01);
pub const IMAGE: FieldId = FieldId::from_u128(0x0E1C6A22_5B7E_4C04_9D5C_2B8B0A0B0C02);

pub fn item(n: u128) -> ItemId {
    ItemId::from_u128(n)
}

pub fn ident(n: u128) -> VariantIdentifier {
    VariantIdentifier::new(item(n), "en", Version::new(1))
}

pub fn locator(n: u128) -> VariantLocator {
    ident(n).in_store(STORE)
}

/// An `en`/1 variant of item `n` with versioned fields.
pub fn variant(n: u128, fields: &[(FieldId, &str)]) -> Variant {
    variant_in(n, "en", 1, fields)
}

pub fn variant_in(n: u128, lang: &str, ver: u32, fields: &[(FieldId, &str)]) -> Variant {
    let id = item(n);
    let coords = VariantIdentifier::new(id, lang, Version::new(ver));
    Variant {
        id,
        language: Language::new(lang),
        version: Version::new(ver),
        revision: uuid::Uuid::from_u128(n),
        base_last_modified: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        variant_last_modified: Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
        properties: ItemProperties {
            name: format!("item-{n}"),
            template_id: item(0xFFFF),
            master_id: None,
            parent_id: Some(item(0xEEEE)),
        },
        fields: fields
            .iter()
            .map(|(fid, value)| {
                Field::new(
                    *fid,
                    id,
                    *value,
                    VarianceInfo::for_variant(VarianceType::Variant, &coords),
                )
            })
            .collect(),
    }
}

/// `SourceVariant` reference to the `en`/1 variant of item `n`.
pub fn source_variant_ref(n: u128) -> String {
    format!("item://{STORE}/{{{}}}?lang=en&ver=1", item(n))
}

/// `SourceItem` reference to item `n`.
pub fn source_item_ref(n: u128) -> String {
    format!("item://{STORE}/{{{}}}", item(n))
}

/// A clone of item `source` (by source-variant reference) with extra fields.
pub fn clone_of(n: u128, source: u128, fields: &[(FieldId, &str)]) -> Variant {
    let reference = source_variant_ref(source);
    let mut all = vec![(SOURCE_VARIANT_FIELD, reference.as_str())];
    all.extend_from_slice(fields);
    variant(n, &all)
}

/// A clone of item `source` (by source-item reference) with extra fields.
pub fn item_clone_of(n: u128, source: u128, fields: &[(FieldId, &str)]) -> Variant {
    let reference = source_item_ref(source);
    let mut all = vec![(SOURCE_ITEM_FIELD, reference.as_str())];
    all.extend_from_slice(fields);
    variant(n, &all)
}

pub fn relationship(source: u128, field: FieldId, target: u128) -> Relationship {
    Relationship {
        id: RelationshipId::new(),
        source_id: item(source),
        source_field_id: Some(field),
        target_id: item(target),
        target_path: format!("/content/item-{target}"),
        target_variance: VarianceInfo::invariant(),
        relationship_type: RelationshipType::ItemReference,
        variance: VarianceInfo::for_variant(VarianceType::Variant, &ident(source)),
    }
}

pub fn ancestor_map(variants: &[Variant]) -> AncestorMap {
    variants
        .iter()
        .map(|v| (v.identifier(), v.clone()))
        .collect()
}

/// Builds the chain of `clone` through `ancestors`.
pub fn chain(clone: &Variant, ancestors: &[Variant]) -> CloneChain {
    build_chain(clone, &ancestor_map(ancestors), &UriLocatorParser, STORE)
}

pub fn raw(variant: &Variant, field: FieldId) -> Option<&str> {
    variant.field(field).map(|f| f.raw_value.as_str())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

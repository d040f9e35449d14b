use promote_types::{
    Error, ItemId, LocatorParser, UriLocatorParser, VariantIdentifier, Version,
};
use proptest::prelude::*;

const ITEM: &str = "110d559f-dea5-42ea-9c1c-8a5df7e70ef9";

fn item() -> ItemId {
    ItemId::parse(ITEM).unwrap()
}

// ── Accepted forms ───────────────────────────────────────────────

#[test]
fn parses_full_uri_with_store() {
    let raw = format!("sitecore://master/{{{ITEM}}}?lang=en&ver=1");
    let locator = UriLocatorParser.parse(&raw, "ignored").unwrap();
    assert_eq!(locator.store, "master");
    assert_eq!(
        locator.identifier,
        VariantIdentifier::new(item(), "en", Version::new(1))
    );
}

#[test]
fn store_defaults_to_context_when_absent() {
    let raw = format!("item://{ITEM}?lang=da-DK&ver=4");
    let locator = UriLocatorParser.parse(&raw, "master").unwrap();
    assert_eq!(locator.store, "master");
    assert_eq!(locator.identifier.language.as_str(), "da-DK");
    assert_eq!(locator.identifier.version, Version::new(4));
}

#[test]
fn bare_guid_with_query_is_accepted() {
    let raw = format!("{{{ITEM}}}?lang=en&ver=2");
    let locator = UriLocatorParser.parse(&raw, "master").unwrap();
    assert_eq!(locator.identifier.id, item());
}

#[test]
fn query_keys_are_case_insensitive_and_unknown_keys_ignored() {
    let raw = format!("{ITEM}?LANG=en&foo=bar&Ver=7&flag");
    let locator = UriLocatorParser.parse(&raw, "master").unwrap();
    assert_eq!(locator.identifier.version, Version::new(7));
    assert_eq!(locator.identifier.language.as_str(), "en");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let raw = format!("  item://master/{ITEM}?lang=en&ver=1 \n");
    assert!(UriLocatorParser.parse(&raw, "master").is_ok());
}

// ── Rejected forms ───────────────────────────────────────────────

#[test]
fn empty_reference_is_rejected() {
    let err = UriLocatorParser.parse("   ", "master").unwrap_err();
    assert!(matches!(err, Error::InvalidLocator(_)));
}

#[test]
fn item_uri_without_language_is_not_a_variant_locator() {
    let raw = format!("item://master/{ITEM}");
    let err = UriLocatorParser.parse(&raw, "master").unwrap_err();
    assert!(matches!(err, Error::InvalidLocator(_)));
}

#[test]
fn missing_version_is_rejected() {
    let raw = format!("{ITEM}?lang=en");
    assert!(UriLocatorParser.parse(&raw, "master").is_err());
}

#[test]
fn non_numeric_version_is_rejected() {
    for ver in ["-1", "abc", "", "4294967296"] {
        let raw = format!("{ITEM}?lang=en&ver={ver}");
        assert!(
            UriLocatorParser.parse(&raw, "master").is_err(),
            "ver={ver} should be rejected"
        );
    }
}

#[test]
fn version_zero_is_accepted() {
    let raw = format!("{ITEM}?lang=en&ver=0");
    let locator = UriLocatorParser.parse(&raw, "master").unwrap();
    assert_eq!(locator.identifier.version, Version::new(0));
}

#[test]
fn malformed_guid_is_reported_as_uuid_error() {
    let err = UriLocatorParser
        .parse("item://master/not-a-guid?lang=en&ver=1", "master")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUuid(_)));
}

#[test]
fn too_many_path_segments_are_rejected() {
    let raw = format!("item://master/extra/{ITEM}?lang=en&ver=1");
    assert!(UriLocatorParser.parse(&raw, "master").is_err());
}

// ── Formatting ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn formatted_locator_parses_back(
        bits in any::<u128>(),
        lang in "[a-z]{2}(-[A-Z]{2})?",
        ver in any::<u32>(),
        store in "[a-z]{1,12}",
    ) {
        let ident = VariantIdentifier::new(ItemId::from_u128(bits), lang.as_str(), Version::new(ver));
        let locator = ident.in_store(store.clone());
        let parsed = UriLocatorParser.parse(&locator.to_string(), "other").unwrap();
        prop_assert_eq!(parsed, locator);
    }
}

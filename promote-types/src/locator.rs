//! Parsing of item URIs into variant locators.
//!
//! Accepted form:
//!
//! ```text
//! [scheme://][store/]{guid}?lang=<code>&ver=<n>
//! ```
//!
//! The braces around the GUID are optional and the store defaults to the
//! store context passed by the caller. Query keys are case-insensitive and
//! unknown keys are ignored.

use crate::{Error, ItemId, Language, Result, VariantIdentifier, VariantLocator, Version};

/// Scheme used when formatting locators.
pub const LOCATOR_SCHEME: &str = "item";

/// Turns a raw reference string into a variant locator.
pub trait LocatorParser: Send + Sync {
    /// Parses `raw`, using `store` when the reference does not name one.
    fn parse(&self, raw: &str, store: &str) -> Result<VariantLocator>;
}

/// Parser for the item URI format described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriLocatorParser;

impl LocatorParser for UriLocatorParser {
    fn parse(&self, raw: &str, store: &str) -> Result<VariantLocator> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidLocator("empty reference".to_string()));
        }

        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };
        let path = path.split_once("://").map_or(path, |(_, rest)| rest);

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let (store, item) = match segments.as_slice() {
            [item] => (store, *item),
            [store, item] => (*store, *item),
            _ => {
                return Err(Error::InvalidLocator(format!(
                    "expected [store/]{{guid}} in {raw:?}"
                )));
            }
        };
        let id = ItemId::parse(item)?;

        let mut language = None;
        let mut version = None;
        for pair in query.unwrap_or_default().split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key.trim().to_ascii_lowercase().as_str() {
                "lang" => language = Some(value.trim()),
                "ver" => version = Some(value.trim()),
                _ => {}
            }
        }

        let language = match language {
            Some(code) if !code.is_empty() => Language::new(code),
            _ => return Err(Error::InvalidLocator(format!("missing lang in {raw:?}"))),
        };
        let version = match version {
            Some(v) => parse_version(v)
                .ok_or_else(|| Error::InvalidLocator(format!("invalid ver {v:?} in {raw:?}")))?,
            None => return Err(Error::InvalidLocator(format!("missing ver in {raw:?}"))),
        };

        Ok(VariantLocator::new(
            store,
            VariantIdentifier::new(id, language, version),
        ))
    }
}

fn parse_version(s: &str) -> Option<Version> {
    s.parse::<u32>().ok().map(Version::new)
}

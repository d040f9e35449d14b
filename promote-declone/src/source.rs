//! Clone-source reference extraction.

use promote_model::clones::{SOURCE_ITEM_FIELD, SOURCE_VARIANT_FIELD};
use promote_model::Variant;
use promote_types::{LocatorParser, VariantLocator};
use tracing::debug;

/// Resolves the locator of the variant `variant` was cloned from.
///
/// A non-blank source-variant field is parsed as-is. Otherwise a non-blank
/// source-item field is combined with the clone's own language and version.
/// Returns `None` when neither is set or the reference does not parse; a
/// broken reference ends the chain rather than failing the batch.
pub fn clone_source(
    variant: &Variant,
    parser: &dyn LocatorParser,
    store: &str,
) -> Option<VariantLocator> {
    let raw = if let Some(field) = variant
        .field(SOURCE_VARIANT_FIELD)
        .filter(|f| !f.is_blank())
    {
        field.raw_value.trim().to_string()
    } else if let Some(field) = variant.field(SOURCE_ITEM_FIELD).filter(|f| !f.is_blank()) {
        // Item-level reference: any query it carries is replaced by our coordinates.
        let item = field.raw_value.trim();
        let item = item.split_once('?').map_or(item, |(path, _)| path);
        format!("{item}?lang={}&ver={}", variant.language, variant.version)
    } else {
        return None;
    };

    match parser.parse(&raw, store) {
        Ok(locator) => Some(locator),
        Err(e) => {
            debug!(
                "Ignoring unparseable clone source {:?} on {}: {}",
                raw,
                variant.identifier(),
                e
            );
            None
        }
    }
}

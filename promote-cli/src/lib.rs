//! Argument handling and the run loop for the `promote-declone` binary.
//!
//! The binary loads a JSON snapshot of a source store into the in-memory
//! repositories, de-clones the requested locators and renders the result as
//! JSON. Everything except logging setup lives here so it can be tested
//! without spawning a process.

use anyhow::{bail, Context, Result};
use clap::Parser;
use promote_declone::{CloneManifestPromoter, DeclonedVariant, PromoterOptions, TargetPromoteContext};
use promote_storage::SourceSnapshot;
use promote_types::{LocatorParser, UriLocatorParser, VariantLocator};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "promote-declone")]
#[command(about = "De-clone clone variants from a source store snapshot")]
pub struct Args {
    /// Snapshot of the source store (JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Source store name; defaults to the store recorded in the snapshot
    #[arg(long)]
    pub store: Option<String>,

    /// Target store the output is destined for
    #[arg(long, default_value = "web")]
    pub target: String,

    /// Promoter options file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Clone locators, e.g. item://master/{guid}?lang=en&ver=1
    #[arg(required = true)]
    pub locators: Vec<String>,
}

/// Reads promoter options, falling back to defaults when no file is given.
pub async fn load_options(path: Option<&Path>) -> Result<PromoterOptions> {
    let Some(path) = path else {
        return Ok(PromoterOptions::default());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse options file {}", path.display()))
}

/// Parses every raw locator against `store`.
pub fn parse_locators(
    parser: &dyn LocatorParser,
    raw: &[String],
    store: &str,
) -> Result<Vec<VariantLocator>> {
    raw.iter()
        .map(|r| {
            parser
                .parse(r, store)
                .with_context(|| format!("Invalid locator {r:?}"))
        })
        .collect()
}

/// Runs one de-clone batch and returns its results.
pub async fn declone(args: &Args) -> Result<Vec<DeclonedVariant>> {
    let snapshot = SourceSnapshot::load(&args.snapshot)
        .await
        .with_context(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;

    let store = match &args.store {
        Some(store) if *store != snapshot.store => bail!(
            "Snapshot holds store {:?}, not {:?}",
            snapshot.store,
            store
        ),
        _ => snapshot.store.clone(),
    };
    debug!(
        "Loaded {} variants from store {}",
        snapshot.variants.len(),
        store
    );

    let options = load_options(args.config.as_deref()).await?;
    let locators = parse_locators(&UriLocatorParser, &args.locators, &store)?;
    let (variants, relationships) = snapshot.into_stores();

    let promoter = CloneManifestPromoter::new(options);
    let context = TargetPromoteContext::new(store, args.target.clone());
    let results = promoter
        .declone_variants(&context, &variants, &relationships, &locators)
        .await
        .context("De-clone failed")?;

    info!("Resolved {} of {} locators", results.len(), locators.len());
    Ok(results)
}

/// Runs one batch and renders it as JSON.
pub async fn run(args: &Args) -> Result<String> {
    let results = declone(args).await?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    Ok(json)
}

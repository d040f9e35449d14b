//! Clone de-cloning CLI
//!
//! Materializes clone variants from a snapshot of a source store and prints
//! the de-cloned variants with their relationships as JSON.
//!
//! Usage:
//!   promote-declone --snapshot master.json 'item://master/{guid}?lang=en&ver=1'
//!
//! Logs go to stderr; stdout carries only the JSON result.

use anyhow::Result;
use clap::Parser;
use promote_cli::{run, Args};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let json = run(&args).await?;
    println!("{json}");
    Ok(())
}

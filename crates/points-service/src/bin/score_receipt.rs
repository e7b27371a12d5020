//! # Score Receipt
//!
//! Scores receipt JSON files from the command line.
//!
//! ## Usage
//! ```bash
//! # Score one receipt
//! cargo run -p points-service --bin score-receipt -- receipts/target.json
//!
//! # Several files share one duplicate cache
//! cargo run -p points-service --bin score-receipt -- a.json b.json a.json
//!
//! # More detail
//! RUST_LOG=debug cargo run -p points-service --bin score-receipt -- a.json
//! ```
//!
//! Prints `<file>: id=<id> points=<n>` per accepted receipt and exits with a
//! failure status if any file was rejected.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use points_service::{read_receipt, ReceiptProcessor, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        bail!("usage: score-receipt <receipt.json>...");
    }

    let config = ServiceConfig::load().context("loading configuration")?;
    info!(
        cache_ttl_secs = config.cache_ttl.map(|d| d.as_secs()),
        files = paths.len(),
        "Scoring receipts"
    );

    let processor = ReceiptProcessor::from_config(&config);
    let mut failed = 0usize;

    for path in &paths {
        let outcome = read_receipt(path)
            .map_err(anyhow::Error::from)
            .and_then(|receipt| processor.process(&receipt).map_err(anyhow::Error::from));

        match outcome {
            Ok(processed) => println!(
                "{}: id={} points={}",
                path.display(),
                processed.id,
                processed.points
            ),
            Err(err) => {
                failed += 1;
                println!("{}: error: {}", path.display(), err);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} receipts rejected", failed, paths.len());
    }

    Ok(())
}

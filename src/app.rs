//! The load → acquire → merge → persist pipeline shared by every binary

use crate::error::Result;
use crate::merge::{merge_catalogs, CatalogSummary};
use crate::sources::CatalogSource;
use crate::store::{load_catalog, save_catalog};
use std::path::Path;

/// Update the catalog at `output` with whatever `source` produces.
///
/// A missing or corrupt `output` is treated as empty. If acquisition fails the
/// error is returned and `output` is not touched.
pub fn run(source: &dyn CatalogSource, output: &Path) -> Result<CatalogSummary> {
    log::info!("Checking for existing {}...", output.display());
    let existing = load_catalog(output);
    if existing.system_count() == 0 {
        log::info!("No existing database found. Creating new one...");
    } else {
        log::info!(
            "Found existing database with {} systems, updating with {} data",
            existing.system_count(),
            source.name()
        );
    }

    let incoming = source.acquire()?;

    let (merged, report) = merge_catalogs(existing, incoming);
    if !report.added.is_empty() {
        log::info!("Added systems: {}", report.added.join(", "));
    }
    if !report.replaced.is_empty() {
        log::info!("Replaced systems: {}", report.replaced.join(", "));
    }

    log::info!("Writing data to {}...", output.display());
    save_catalog(output, &merged)?;
    log::info!("Successfully updated {}", output.display());

    Ok(CatalogSummary::of(&merged))
}

/// Initialize logging. Set RUST_LOG to control the level (default: info).
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Print the summary on success, or log the error and exit with status 1
pub fn finish(result: Result<CatalogSummary>) {
    match result {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            log::error!("Failed to build catalog: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

//! ROM Catalog - builds and maintains `roms.json`
//!
//! Fetches a published catalog, scans a local ROM directory, or walks a
//! remote directory listing, then merges the result into the existing
//! catalog file system by system.

pub mod app;
pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod sources;
pub mod store;
pub mod systems;

// Re-export commonly used items
pub use app::run;
pub use config::Config;
pub use error::{CatalogError, Result};
pub use merge::{merge_catalogs, CatalogSummary, MergeReport};
pub use models::{resolve_path, Catalog, GameEntry, GamePath, SystemEntry};
pub use sources::{CatalogSource, LocalScanSource, RemoteDocumentSource, RemoteListingSource};
pub use store::{load_catalog, save_catalog, DEFAULT_OUTPUT_FILE};

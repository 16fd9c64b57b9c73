//! Acquisition strategies: each one produces a partial catalog of freshly
//! discovered systems

pub mod local_scan;
pub mod remote_document;
pub mod remote_listing;

pub use local_scan::{scan_directory, LocalScanSource};
pub use remote_document::RemoteDocumentSource;
pub use remote_listing::{ListingEntry, ListingKind, RemoteListingSource};

use crate::error::Result;
use crate::models::Catalog;

/// Something that can produce a fresh set of systems.
///
/// Every system in the returned catalog has `rom_count == games.len()`.
pub trait CatalogSource {
    /// Short label for log output
    fn name(&self) -> &str;

    /// Fetch or scan the systems. An error aborts the run before anything is merged.
    fn acquire(&self) -> Result<Catalog>;
}

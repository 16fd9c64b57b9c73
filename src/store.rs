//! Reading and writing `roms.json`

use crate::error::Result;
use crate::models::Catalog;
use std::path::Path;

/// Default output file, relative to the current working directory
pub const DEFAULT_OUTPUT_FILE: &str = "roms.json";

/// Load an existing catalog, or an empty one if the file is missing or corrupt.
///
/// Never fails: a file that cannot be read or parsed is logged and treated as
/// "no existing data".
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Catalog {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("No existing {} found, starting fresh", path.display());
        return Catalog::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}, creating new file: {}", path.display(), e);
            return Catalog::default();
        }
    };

    match serde_json::from_str::<Catalog>(&content) {
        Ok(mut catalog) => {
            catalog.normalize();
            log::info!(
                "Loaded existing catalog with {} systems",
                catalog.system_count()
            );
            catalog
        }
        Err(e) => {
            log::warn!("{} is corrupted, creating new file: {}", path.display(), e);
            Catalog::default()
        }
    }
}

/// Serialize a catalog as 2-space indented UTF-8 JSON, replacing the file
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, content)?;

    log::debug!("Wrote {} systems to {}", catalog.system_count(), path.display());
    Ok(())
}

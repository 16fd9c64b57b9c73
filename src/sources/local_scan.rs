//! Build a catalog by scanning a ROM directory on disk
//!
//! Layout expected: `<root>/<system>/<rom files>`. Only the first level of
//! each system directory is read.

use crate::error::{CatalogError, Result};
use crate::models::{sort_games, Catalog, GameEntry, SystemEntry};
use crate::sources::CatalogSource;
use crate::systems::{display_name, is_hidden, is_rom_file};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct LocalScanSource {
    root: PathBuf,
}

impl LocalScanSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CatalogSource for LocalScanSource {
    fn name(&self) -> &str {
        "local scan"
    }

    fn acquire(&self) -> Result<Catalog> {
        scan_directory(&self.root)
    }
}

/// Scan `root` for system directories and their ROM files
pub fn scan_directory(root: &Path) -> Result<Catalog> {
    if !root.exists() {
        return Err(CatalogError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CatalogError::NotADirectory(root.to_path_buf()));
    }

    log::info!("Scanning directory: {}", root.display());

    let mut systems = BTreeMap::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&dir_name) {
            continue;
        }

        let games = scan_system(root, entry.path(), &dir_name);
        if games.is_empty() {
            log::info!("  {}: no ROMs found, skipping", dir_name);
            continue;
        }

        log::info!("  {}: {} ROMs", dir_name, games.len());
        systems.insert(
            dir_name.clone(),
            SystemEntry::new(display_name(&dir_name), dir_name, games),
        );
    }

    Ok(Catalog::from_systems(systems))
}

/// ROM files directly inside one system directory, sorted by name
fn scan_system(root: &Path, system_dir: &Path, system_name: &str) -> Vec<GameEntry> {
    let mut games = Vec::new();

    for entry in WalkDir::new(system_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", system_name, e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_rom_file(&name) {
            continue;
        }

        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => {
                log::warn!("Could not stat {}: {}", entry.path().display(), e);
                0
            }
        };

        let path = relative_path(root, entry.path())
            .unwrap_or_else(|| format!("{}/{}", system_name, name));

        games.push(GameEntry {
            name,
            size,
            path: Some(path),
            download_url: None,
            extra: Default::default(),
        });
    }

    sort_games(&mut games);
    games
}

/// `path` relative to `root`, joined with forward slashes
pub(crate) fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
#[path = "local_scan_tests.rs"]
mod tests;

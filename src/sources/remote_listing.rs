//! Build a catalog by walking a remote directory listing API
//!
//! Speaks the GitHub contents API shape: `GET {base}/{path}` returns a JSON
//! array of entries with `name`, `path`, `type`, `size` and `download_url`.

use crate::config::USER_AGENT;
use crate::error::{CatalogError, Result};
use crate::models::{sort_games, Catalog, GameEntry, SystemEntry};
use crate::sources::CatalogSource;
use crate::systems::{display_name, is_hidden, is_rom_file};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Entry kind as reported by the listing API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    File,
    Dir,
    /// Symlinks, submodules and anything else we don't descend into
    #[serde(other)]
    Other,
}

/// One item of a directory listing
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub download_url: Option<String>,
}

pub struct RemoteListingSource {
    api_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteListingSource {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }

    /// List one directory
    pub fn list(&self, path: &str) -> Result<Vec<ListingEntry>> {
        let url = self.url_for(path);
        log::debug!("Listing: {}", url);

        let mut request = self.client.get(&url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List one directory, treating any failure as an empty directory
    fn list_or_empty(&self, path: &str) -> Vec<ListingEntry> {
        match self.list(path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to list '{}': {}", path, e);
                Vec::new()
            }
        }
    }

    /// Collect ROM files under `path`, descending into subdirectories
    fn collect_games(&self, path: &str, games: &mut Vec<GameEntry>) {
        for entry in self.list_or_empty(path) {
            match entry.kind {
                ListingKind::Dir if !is_hidden(&entry.name) => {
                    self.collect_games(&entry.path, games);
                }
                ListingKind::File if is_rom_file(&entry.name) => games.push(GameEntry {
                    name: entry.name,
                    size: entry.size,
                    path: Some(entry.path),
                    download_url: entry.download_url,
                    extra: Default::default(),
                }),
                _ => {}
            }
        }
    }
}

impl CatalogSource for RemoteListingSource {
    fn name(&self) -> &str {
        "remote listing"
    }

    fn acquire(&self) -> Result<Catalog> {
        log::info!("Listing collection at: {}", self.api_url);

        let mut systems = BTreeMap::new();

        for entry in self.list_or_empty("") {
            if entry.kind != ListingKind::Dir || is_hidden(&entry.name) {
                continue;
            }

            let mut games = Vec::new();
            self.collect_games(&entry.path, &mut games);
            sort_games(&mut games);

            if games.is_empty() {
                log::info!("  {}: no ROMs found, skipping", entry.name);
                continue;
            }

            log::info!("  {}: {} ROMs", entry.name, games.len());
            systems.insert(
                entry.name.clone(),
                SystemEntry::new(display_name(&entry.name), entry.name, games),
            );
        }

        Ok(Catalog::from_systems(systems))
    }
}

#[cfg(test)]
#[path = "remote_listing_tests.rs"]
mod tests;

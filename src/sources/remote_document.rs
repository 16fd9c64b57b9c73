//! Download the pre-built catalog published with the collection

use crate::config::USER_AGENT;
use crate::error::{CatalogError, Result};
use crate::models::Catalog;
use crate::sources::CatalogSource;

/// Fetches a complete `roms.json` from a URL and fills in missing game paths
pub struct RemoteDocumentSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl RemoteDocumentSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch and parse the document at `url`
    pub(crate) fn fetch_from(client: &reqwest::blocking::Client, url: &str) -> Result<Catalog> {
        log::info!("Downloading catalog from: {}", url);

        let response = client.get(url).header("User-Agent", USER_AGENT).send()?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        let body = response.text()?;
        let document: serde_json::Value = serde_json::from_str(&body)?;
        if document.get("systems").is_none() {
            return Err(CatalogError::MissingSystems);
        }

        let mut catalog: Catalog = serde_json::from_value(document)?;
        let unresolved = catalog.resolve_paths();
        catalog.normalize();

        log::info!(
            "Downloaded {} systems with {} ROMs",
            catalog.system_count(),
            catalog.total_roms()
        );
        if unresolved > 0 {
            log::warn!("{} games have no usable path", unresolved);
        }

        Ok(catalog)
    }
}

impl CatalogSource for RemoteDocumentSource {
    fn name(&self) -> &str {
        "remote document"
    }

    fn acquire(&self) -> Result<Catalog> {
        Self::fetch_from(&self.client, &self.url)
    }
}

#[cfg(test)]
#[path = "remote_document_tests.rs"]
mod tests;

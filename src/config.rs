//! Runtime configuration
//!
//! Defaults point at the public Rom-Collection repository. Each value can be
//! overridden through an environment variable so the binaries keep their
//! single positional argument.

use crate::store::DEFAULT_OUTPUT_FILE;
use std::path::PathBuf;

/// Pre-built catalog published alongside the collection
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://raw.githubusercontent.com/Cyborg-Taco/Rom-Collection/main/roms.json";

/// GitHub contents API root for the collection
pub const DEFAULT_API_URL: &str =
    "https://api.github.com/repos/Cyborg-Taco/Rom-Collection/contents";

/// Sent with every request; GitHub rejects requests without one
pub const USER_AGENT: &str = "rom-catalog/0.1";

pub const ENV_OUTPUT: &str = "ROM_CATALOG_OUTPUT";
pub const ENV_DOCUMENT_URL: &str = "ROM_CATALOG_DOCUMENT_URL";
pub const ENV_API_URL: &str = "ROM_CATALOG_API_URL";
pub const ENV_API_TOKEN: &str = "ROM_CATALOG_API_TOKEN";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the merged catalog is written
    pub output: PathBuf,
    /// URL of the pre-built remote catalog
    pub document_url: String,
    /// Base URL of the directory listing API
    pub api_url: String,
    /// Optional bearer token for the listing API
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            output: get(ENV_OUTPUT).map(PathBuf::from).unwrap_or(defaults.output),
            document_url: get(ENV_DOCUMENT_URL).unwrap_or(defaults.document_url),
            api_url: get(ENV_API_URL).unwrap_or(defaults.api_url),
            api_token: get(ENV_API_TOKEN).or_else(|| get(ENV_GITHUB_TOKEN)),
        }
    }
}

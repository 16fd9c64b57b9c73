//! Error types for rom_catalog

use std::fmt;
use std::path::PathBuf;

/// Unified error type for catalog acquisition and persistence
#[derive(Debug)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Remote document has no top-level `systems` key
    MissingSystems,
    /// Document top level is not the expected shape
    Shape(String),
    /// Scan root does not exist
    RootNotFound(PathBuf),
    /// Scan root exists but is not a directory
    NotADirectory(PathBuf),
    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(e) => write!(f, "Network error: {}", e),
            CatalogError::Parse(e) => write!(f, "Parse error: {}", e),
            CatalogError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            CatalogError::MissingSystems => {
                write!(f, "Downloaded JSON doesn't have a 'systems' key")
            }
            CatalogError::Shape(msg) => write!(f, "Unexpected document shape: {}", msg),
            CatalogError::RootNotFound(path) => {
                write!(f, "Directory does not exist: {}", path.display())
            }
            CatalogError::NotADirectory(path) => {
                write!(f, "Not a directory: {}", path.display())
            }
            CatalogError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Network(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            CatalogError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

//! Loader settings

use crate::error::LoaderError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Addresses some drivers hand back instead of null for unsupported
/// functions.
pub const DEFAULT_SENTINEL_ADDRESSES: [usize; 2] = [1, 2];

/// Loader settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Non-null addresses treated as "not found".
    pub sentinel_addresses: Vec<usize>,
    /// Overrides the platform's default core GL library.
    pub core_library: Option<String>,
    /// Log every slot that ends up unavailable after a reload.
    pub log_unavailable: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            sentinel_addresses: DEFAULT_SENTINEL_ADDRESSES.to_vec(),
            core_library: None,
            log_unavailable: false,
        }
    }
}

impl LoaderSettings {
    pub fn from_json(text: &str) -> Result<Self, LoaderError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoaderError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

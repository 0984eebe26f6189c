//! Application configuration for the `boolex` tools.
//!
//! Every field has a default, so a configuration file only needs the keys
//! it changes:
//!
//! ```json
//! {
//!   "index": { "sort_files": true, "parallel": true },
//!   "search": { "max_displayed": 20 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoolexError, Result};
use crate::index::IndexConfig;

/// How many result ids the search tool prints by default.
pub const DEFAULT_MAX_DISPLAYED: usize = 10;

/// Settings for printing search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of document ids printed before the result is elided.
    pub max_displayed: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_displayed: DEFAULT_MAX_DISPLAYED,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolexConfig {
    /// Index build settings.
    pub index: IndexConfig,
    /// Search output settings.
    pub search: SearchConfig,
}

impl BoolexConfig {
    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| BoolexError::config(format!("{}: {e}", path.display())))
    }

    /// Parse a JSON configuration string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BoolexError::config(e.to_string()))
    }
}

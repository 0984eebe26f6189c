//! Configuration for building a boolean index.

use serde::{Deserialize, Serialize};

/// How many documents pass between two progress log lines by default.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Configuration for [`BooleanIndex::build`](crate::index::BooleanIndex::build).
///
/// # Example
///
/// ```
/// use boolex::index::config::IndexConfig;
///
/// let config = IndexConfig::builder()
///     .sort_files(true)
///     .parallel(true)
///     .threads(4)
///     .build();
///
/// assert!(config.sort_files);
/// assert_eq!(config.threads, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Sort corpus files by name before assigning document ids.
    ///
    /// When disabled, ids follow the directory listing order of the
    /// filesystem, which is not guaranteed to be stable across machines.
    pub sort_files: bool,

    /// Extract document terms on a thread pool during `build`.
    pub parallel: bool,

    /// Worker threads for parallel builds (`None` uses one per CPU).
    pub threads: Option<usize>,

    /// Log build progress every this many documents (0 disables it).
    pub progress_interval: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            sort_files: false,
            parallel: false,
            threads: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl IndexConfig {
    /// Create a new builder for IndexConfig.
    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::new()
    }

    /// Number of worker threads a parallel build will use.
    pub fn effective_threads(&self) -> usize {
        self.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }
}

/// Builder for IndexConfig.
#[derive(Debug, Clone, Default)]
pub struct IndexConfigBuilder {
    config: IndexConfig,
}

impl IndexConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        IndexConfigBuilder {
            config: IndexConfig::default(),
        }
    }

    /// Sort corpus files by name before assigning document ids.
    pub fn sort_files(mut self, sort: bool) -> Self {
        self.config.sort_files = sort;
        self
    }

    /// Enable or disable parallel term extraction.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set the number of worker threads for parallel builds.
    pub fn threads(mut self, threads: usize) -> Self {
        self.config.threads = Some(threads);
        self
    }

    /// Set the progress logging interval.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.config.progress_interval = interval;
        self
    }

    /// Build the IndexConfig.
    pub fn build(self) -> IndexConfig {
        self.config
    }
}

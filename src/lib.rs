//! # boolex
//!
//! Boolean retrieval over a directory of plain-text documents.
//!
//! ## Features
//!
//! - Whitespace tokenization, punctuation stripping and Latin/Cyrillic case folding
//! - Suffix stemming for English and Russian
//! - In-memory inverted index with optional parallel construction
//! - Tab-separated text persistence with per-line error reporting
//! - Left-to-right `AND` / `OR` / `NOT` query evaluation
//! - Zipf term-frequency reports in CSV
//!
//! ## Example
//!
//! ```
//! use boolex::prelude::*;
//!
//! let mut index = BooleanIndex::new();
//! index.add_document(1, "The cat sat.").unwrap();
//! index.add_document(2, "Dogs and cats!").unwrap();
//!
//! let search = BooleanSearch::new(&index);
//! assert_eq!(search.search("cat NOT dog"), vec![1]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod report;

pub mod prelude {
    pub use crate::analysis::{Analyzer, StandardAnalyzer, normalize, stem, tokenize};
    pub use crate::config::BoolexConfig;
    pub use crate::error::{BoolexError, Result};
    pub use crate::index::{BooleanIndex, DocId, IndexConfig, IndexStats};
    pub use crate::query::{BooleanSearch, Operator, QueryToken, parse_query};
    pub use crate::report::ZipfReport;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

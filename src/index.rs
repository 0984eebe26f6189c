//! Boolean inverted index: construction, persistence and statistics.

pub mod boolean;
pub mod config;
pub mod corpus;
pub mod io;

pub use boolean::{BooleanIndex, BuildReport, FailedDocument, IndexStats};
pub use config::IndexConfig;
pub use io::{LoadReport, SkipReason, SkippedLine};

/// Identifier of a document; assigned from 1 in corpus order.
pub type DocId = u32;

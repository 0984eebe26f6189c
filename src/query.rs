//! Boolean query parsing and evaluation.
//!
//! Queries are whitespace-separated terms and the operators `AND`, `OR` and
//! `NOT` (any case). They are evaluated strictly left to right with no
//! precedence and no parentheses: `a AND b OR c` means `(a AND b) OR c`.

pub mod boolean;
pub mod parser;
pub mod searcher;

pub use boolean::{difference, intersect, normalize_ids, union};
pub use parser::{Operator, QueryToken, parse_query};
pub use searcher::BooleanSearch;

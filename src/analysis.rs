//! Text analysis for boolex.
//!
//! Raw document text flows through a tokenizer and a chain of token filters
//! before it reaches the index:
//!
//! ```text
//! text → WhitespaceTokenizer → StripFilter → LowercaseFilter
//!      → RemoveEmptyFilter → StemFilter → terms
//! ```
//!
//! The same steps are available as the free functions [`tokenize`],
//! [`normalize`] and [`stem`] for callers that only need plain strings.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::lowercase::normalize;
pub use token_filter::stem::suffix::stem;
pub use token_filter::strip::strip_punctuation;
pub use token_filter::{Filter, Stemmer};
pub use tokenizer::Tokenizer;

/// Split `text` on whitespace, strip surrounding punctuation from every
/// piece, drop pieces that become empty and normalize the rest.
///
/// # Examples
///
/// ```
/// use boolex::analysis::tokenize;
///
/// assert_eq!(tokenize("Hello, World!  (again)"), vec!["hello", "world", "again"]);
/// assert!(tokenize(" ... -- ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(strip_punctuation)
        .filter(|word| !word.is_empty())
        .map(normalize)
        .collect()
}

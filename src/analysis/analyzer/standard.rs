//! The analyzer used by the boolean index.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer
//! 2. StripFilter (surrounding ASCII punctuation)
//! 3. LowercaseFilter (ASCII and Cyrillic `А..=Я`)
//! 4. RemoveEmptyFilter
//! 5. StemFilter (suffix stemmer by default)
//!
//! # Examples
//!
//! ```
//! use boolex::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let terms: Vec<_> = analyzer.analyze("Cats were JUMPING!").unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["cat", "were", "jump"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::{StemFilter, Stemmer, SuffixStemmer};
use crate::analysis::token_filter::{LowercaseFilter, RemoveEmptyFilter, StripFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Whitespace tokenization, punctuation stripping, case folding and stemming.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a standard analyzer with the suffix stemmer.
    pub fn new() -> Self {
        Self::with_stemmer(Arc::new(SuffixStemmer::new()))
    }

    /// Create a standard analyzer that stems with `stemmer`.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(StemFilter::with_stemmer(stemmer)))
            .with_name("standard");

        StandardAnalyzer { inner }
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::IdentityStemmer;

    fn terms(analyzer: &StandardAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze(text).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();
        assert_eq!(
            terms(&analyzer, "The Quick, brown foxes -- jumped!"),
            vec!["the", "quick", "brown", "foxe", "jump"]
        );
    }

    #[test]
    fn test_standard_analyzer_cyrillic() {
        let analyzer = StandardAnalyzer::new();
        assert_eq!(terms(&analyzer, "КНИГАМИ и столов."), vec!["книг", "и", "стол"]);
    }

    #[test]
    fn test_standard_analyzer_custom_stemmer() {
        let analyzer = StandardAnalyzer::with_stemmer(Arc::new(IdentityStemmer::new()));
        assert_eq!(terms(&analyzer, "Jumping CATS"), vec!["jumping", "cats"]);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(StandardAnalyzer::new().name(), "standard");
    }
}

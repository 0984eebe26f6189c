//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Remove leading and trailing ASCII punctuation and whitespace from `word`.
///
/// Punctuation inside the word (`don't`, `e-mail`) is kept.
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
}

/// A filter that strips surrounding punctuation from tokens.
///
/// Tokens that consist of punctuation only are marked as stopped.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let stripped = strip_punctuation(&token.text);
                if stripped.is_empty() {
                    token.stop()
                } else if stripped.len() == token.text.len() {
                    token
                } else {
                    let stripped = stripped.to_string();
                    token.with_text(stripped)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

//! Lowercase filter implementation.
//!
//! Case folding is deliberately narrow: ASCII `A..=Z` and the Cyrillic
//! capitals `А..=Я` are folded, everything else is left alone.
//!
//! # Examples
//!
//! ```
//! use boolex::analysis::token_filter::Filter;
//! use boolex::analysis::token_filter::lowercase::LowercaseFilter;
//! use boolex::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("МИР", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "мир");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Distance between a Cyrillic capital in `А..=Я` and its small letter.
const CYRILLIC_CASE_OFFSET: u32 = 0x20;

/// Fold a single token to lower case.
///
/// ASCII letters are lowered, Cyrillic `А` (U+0410) through `Я` (U+042F) are
/// shifted to `а..=я`, all other characters pass through unchanged.
pub fn normalize(token: &str) -> String {
    token.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        'А'..='Я' => char::from_u32(c as u32 + CYRILLIC_CASE_OFFSET).unwrap_or(c),
        _ => c,
    }
}

/// A filter that folds token text to lower case with [`normalize`].
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let folded = normalize(&token.text);
                    token.with_text(folded)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

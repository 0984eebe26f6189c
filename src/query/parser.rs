//! Query tokenization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoolexError;

/// A boolean set operator.
///
/// The default, `OR`, joins terms that appear before any explicit operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Intersection.
    And,
    /// Union.
    #[default]
    Or,
    /// Difference: running result minus the next term's documents.
    Not,
}

impl Operator {
    /// Canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = BoolexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Operator::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Operator::Or)
        } else if s.eq_ignore_ascii_case("NOT") {
            Ok(Operator::Not)
        } else {
            Err(BoolexError::query(format!("not an operator: {s}")))
        }
    }
}

/// One whitespace-separated piece of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryToken {
    /// `AND`, `OR` or `NOT`.
    Operator(Operator),
    /// Anything else, with its original case.
    Term(String),
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryToken::Operator(op) => write!(f, "{op}"),
            QueryToken::Term(term) => f.write_str(term),
        }
    }
}

/// Split `query` on whitespace and classify every piece.
///
/// # Examples
///
/// ```
/// use boolex::query::{parse_query, Operator, QueryToken};
///
/// let tokens = parse_query("Cats and dogs");
/// assert_eq!(
///     tokens,
///     vec![
///         QueryToken::Term("Cats".to_string()),
///         QueryToken::Operator(Operator::And),
///         QueryToken::Term("dogs".to_string()),
///     ]
/// );
/// ```
pub fn parse_query(query: &str) -> Vec<QueryToken> {
    query
        .split_whitespace()
        .map(|word| match word.parse::<Operator>() {
            Ok(op) => QueryToken::Operator(op),
            Err(_) => QueryToken::Term(word.to_string()),
        })
        .collect()
}

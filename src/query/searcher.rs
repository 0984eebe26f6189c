//! Left-to-right boolean query evaluation.

use log::debug;

use crate::index::{BooleanIndex, DocId};
use crate::query::boolean::{difference, intersect, normalize_ids, union};
use crate::query::parser::{Operator, QueryToken, parse_query};

/// Evaluates boolean queries against a borrowed [`BooleanIndex`].
///
/// The searcher never mutates the index, so any number of searchers may
/// share one index across threads.
///
/// # Evaluation
///
/// Tokens are folded left to right. Operators only change the operator
/// used for the next term (initially `OR`). The first term initializes the
/// result; each later term is combined with it: `AND` intersects, `OR`
/// unites, `NOT` subtracts. There is no universal document set, so an
/// operator before the first term has no effect: `NOT cat` returns the
/// documents containing `cat`.
///
/// # Examples
///
/// ```
/// use boolex::index::BooleanIndex;
/// use boolex::query::BooleanSearch;
///
/// let mut index = BooleanIndex::new();
/// index.add_document(1, "cat dog").unwrap();
/// index.add_document(2, "dog bird").unwrap();
/// index.add_document(3, "cat bird").unwrap();
///
/// let search = BooleanSearch::new(&index);
/// assert_eq!(search.search("cat AND dog"), vec![1]);
/// assert_eq!(search.search("cat OR bird"), vec![1, 2, 3]);
/// assert_eq!(search.search("cat NOT bird"), vec![1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BooleanSearch<'a> {
    index: &'a BooleanIndex,
}

impl<'a> BooleanSearch<'a> {
    /// Create a searcher over `index`.
    pub fn new(index: &'a BooleanIndex) -> Self {
        BooleanSearch { index }
    }

    /// The index being searched.
    pub fn index(&self) -> &'a BooleanIndex {
        self.index
    }

    /// Evaluate `query`; the result is ascending and duplicate-free.
    pub fn search(&self, query: &str) -> Vec<DocId> {
        let tokens = parse_query(query);
        debug!("Query tokens: {tokens:?}");
        self.search_tokens(&tokens)
    }

    /// Evaluate an already tokenized query.
    pub fn search_tokens(&self, tokens: &[QueryToken]) -> Vec<DocId> {
        match tokens {
            [] => Vec::new(),
            [QueryToken::Term(term)] => self.index.get_documents(term),
            [QueryToken::Operator(_)] => Vec::new(),
            _ => normalize_ids(self.fold(tokens)),
        }
    }

    fn fold(&self, tokens: &[QueryToken]) -> Vec<DocId> {
        let mut result: Option<Vec<DocId>> = None;
        let mut operator = Operator::default();

        for token in tokens {
            let term = match token {
                QueryToken::Operator(op) => {
                    operator = *op;
                    continue;
                }
                QueryToken::Term(term) => term,
            };

            let docs = self.index.get_documents(term);
            result = Some(match result {
                None => docs,
                Some(current) => match operator {
                    Operator::And => intersect(&current, &docs),
                    Operator::Or => union(&current, &docs),
                    Operator::Not => difference(&current, &docs),
                },
            });
        }

        result.unwrap_or_default()
    }
}

use std::collections::HashSet;
use std::sync::Arc;
use crate::analysis::tokenizer::{AsciiTokenizer, Tokenizer};
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::index::trie::TrieIndex;
use crate::query::ast::QueryExpr;
use crate::query::parser::parse_query;

/// Evaluates parsed queries against a fully built, read-only index.
/// Stateless apart from the shared `Arc`; safe for any number of
/// concurrent callers.
pub struct QueryEvaluator {
    index: Arc<TrieIndex>,
    tokenizer: AsciiTokenizer,
}

impl QueryEvaluator {
    pub fn new(index: Arc<TrieIndex>) -> Self {
        QueryEvaluator {
            index,
            tokenizer: AsciiTokenizer::default(),
        }
    }

    /// Parse + evaluate a raw query line.
    pub fn search(&self, input: &str) -> Result<HashSet<DocId>> {
        let query = parse_query(input)?;
        Ok(self.eval(&query))
    }

    pub fn eval(&self, query: &QueryExpr) -> HashSet<DocId> {
        match query {
            QueryExpr::Term(term) => self.lookup(term),
            QueryExpr::And(a, b) => {
                let left = self.lookup(a);
                let right = self.lookup(b);
                left.intersection(&right).cloned().collect()
            }
            QueryExpr::Or(a, b) => {
                let left = self.lookup(a);
                let right = self.lookup(b);
                left.union(&right).cloned().collect()
            }
        }
    }

    /// Trie keys are normalized tokens, so query terms go through the same
    /// normalization before lookup. A term that normalizes to nothing can
    /// match nothing.
    fn lookup(&self, term: &str) -> HashSet<DocId> {
        match self.tokenizer.tokenize(term).into_iter().next() {
            Some(token) => self.index.lookup(&token),
            None => HashSet::new(),
        }
    }
}

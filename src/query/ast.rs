use serde::{Serialize, Deserialize};

/// Parsed boolean query: a single term or exactly two terms joined by one
/// operator. No precedence, no parentheses, no longer chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryExpr {
    Term(String),
    And(String, String),
    Or(String, String),
}

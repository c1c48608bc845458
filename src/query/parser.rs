use tracing::debug;
use crate::core::error::{Error, ErrorKind, Result};
use crate::query::ast::QueryExpr;

/// Parses a raw query line into a `QueryExpr`.
///
/// The line is split on whitespace and only the first three fields are
/// read: term, operator, term. An unrecognized operator token degrades to
/// a lookup of the first term alone; a present operator with no second
/// term is malformed.
pub fn parse_query(input: &str) -> Result<QueryExpr> {
    let mut fields = input.split_whitespace();

    let term1 = fields.next().ok_or_else(|| {
        Error::new(ErrorKind::MalformedQuery, "query has no terms".to_string())
    })?;

    let Some(operator) = fields.next() else {
        return Ok(QueryExpr::Term(term1.to_string()));
    };

    match operator {
        "AND" | "and" | "OR" | "or" => {
            let term2 = fields.next().ok_or_else(|| {
                Error::new(
                    ErrorKind::MalformedQuery,
                    format!("operator {} requires a second term", operator),
                )
            })?;
            if operator.eq_ignore_ascii_case("and") {
                Ok(QueryExpr::And(term1.to_string(), term2.to_string()))
            } else {
                Ok(QueryExpr::Or(term1.to_string(), term2.to_string()))
            }
        }
        other => {
            debug!("unrecognized operator {:?}, falling back to single-term lookup", other);
            Ok(QueryExpr::Term(term1.to_string()))
        }
    }
}

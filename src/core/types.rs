use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque document identifier (a filename or logical name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Token → document ids, as produced by the shuffle stage.
/// Duplicate ids are allowed here; they collapse in the trie's posting set.
pub type GroupedData = HashMap<String, Vec<DocId>>;

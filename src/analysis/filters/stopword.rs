use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use crate::analysis::filter::TokenFilter;
use crate::core::error::{Error, ErrorKind, Result};

/// Drops tokens that appear in the configured stop-word set.
/// The set is assumed already normalized; comparison is exact match.
#[derive(Debug)]
pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    /// Loads a stop-word list, one word per line. A missing or unreadable
    /// resource is a fatal precondition for any build that expects one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::new(
                ErrorKind::MissingStopWords,
                format!("cannot open stop-word list {}: {}", path.display(), e),
            )
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut stop_words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| {
                Error::new(
                    ErrorKind::MissingStopWords,
                    format!("cannot read stop-word list: {}", e),
                )
            })?;
            let word = line.trim();
            if !word.is_empty() {
                stop_words.insert(word.to_string());
            }
        }
        Ok(StopWordFilter { stop_words })
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }
}

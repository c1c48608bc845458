//! Document Source Module
//!
//! Supplies the `DocId → raw text` mapping the build consumes. The build
//! coordinator only ever sees this trait; where the bytes come from
//! (directory of text files, in-memory fixture) is a collaborator detail.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;

pub trait DocumentSource: Send + Sync {
    /// Identifiers of every document in the corpus.
    fn ids(&self) -> Result<Vec<DocId>>;

    /// Raw text of one document. `UnreadableDocument` when it cannot be read;
    /// the build skips that unit and keeps going.
    fn fetch(&self, id: &DocId) -> Result<String>;
}

/// Corpus backed by the `.txt` files of a single directory.
/// The file name is the document identifier.
pub struct FsDocumentSource {
    dir: PathBuf,
}

impl FsDocumentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsDocumentSource { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSource for FsDocumentSource {
    fn ids(&self) -> Result<Vec<DocId>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            Error::new(
                ErrorKind::Io,
                format!("cannot list corpus directory {}: {}", self.dir.display(), e),
            )
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.ends_with(".txt") && entry.path().is_file() {
                ids.push(DocId::new(name));
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn fetch(&self, id: &DocId) -> Result<String> {
        fs::read_to_string(self.dir.join(id.as_str())).map_err(|e| {
            Error::new(
                ErrorKind::UnreadableDocument,
                format!("cannot read document {}: {}", id, e),
            )
        })
    }
}

/// In-memory corpus for tests, benches and embedded use.
#[derive(Default)]
pub struct MemoryDocumentSource {
    docs: HashMap<DocId, String>,
}

impl MemoryDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let docs = pairs
            .into_iter()
            .map(|(id, text)| (DocId::new(id), text.into()))
            .collect();
        MemoryDocumentSource { docs }
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(DocId::new(id), text.into());
    }
}

impl DocumentSource for MemoryDocumentSource {
    fn ids(&self) -> Result<Vec<DocId>> {
        let mut ids: Vec<DocId> = self.docs.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    fn fetch(&self, id: &DocId) -> Result<String> {
        self.docs.get(id).cloned().ok_or_else(|| {
            Error::new(
                ErrorKind::UnreadableDocument,
                format!("no such document: {}", id),
            )
        })
    }
}

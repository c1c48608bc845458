use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// A document that could not be read during the build.
/// The unit is skipped; the rest of the build proceeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildWarning {
    pub doc_id: DocId,
    pub reason: String,
}

/// Outcome metrics of one index build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub workers: usize,
    pub documents_indexed: usize,
    pub documents_skipped: usize,
    pub pairs_merged: usize,
    pub distinct_terms: usize,
    pub warnings: Vec<BuildWarning>,
}

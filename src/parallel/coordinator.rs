use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use chrono::Utc;
use crossbeam::channel::bounded;
use parking_lot::Mutex;
use tracing::{info, warn};
use crate::analysis::analyzer::Analyzer;
use crate::core::config::BuildConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::{BuildStats, BuildWarning};
use crate::core::types::GroupedData;
use crate::index::trie::TrieIndex;
use crate::pipeline::grouper::group_pairs;
use crate::pipeline::mapper::map_document;
use crate::source::DocumentSource;

/// Runs the whole indexing pipeline: one worker unit per document
/// (fetch → analyze → map → group, all private state), then a single-writer
/// merge of every unit's GroupedData into the trie.
///
/// Workers never touch the trie. They hand their GroupedData to the
/// coordinator thread over a bounded channel, and that thread is the only
/// one that ever inserts, so at most one insert sequence runs at a time
/// without any lock on the index itself.
pub struct BuildCoordinator {
    config: BuildConfig,
    progress: Arc<AtomicUsize>,
}

impl BuildCoordinator {
    pub fn new(config: BuildConfig) -> Self {
        BuildCoordinator {
            config,
            progress: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_workers(workers: usize) -> Self {
        BuildCoordinator::new(BuildConfig::with_workers(workers))
    }

    /// Units processed so far in the current build.
    pub fn get_progress(&self) -> usize {
        self.progress.load(Ordering::Relaxed)
    }

    /// Builds the full index over `source`. Blocks until every unit has been
    /// processed and merged; no partial index is ever observable. Documents
    /// that cannot be read are skipped and reported in the stats.
    pub fn build<S>(&self, source: &S, analyzer: &Analyzer) -> Result<(TrieIndex, BuildStats)>
    where
        S: DocumentSource + ?Sized,
    {
        let started_at = Utc::now();
        let clock = Instant::now();
        self.progress.store(0, Ordering::Relaxed);

        let ids = source.ids()?;
        let total = ids.len();
        info!(
            "indexing {} documents with {} workers",
            total, self.config.workers
        );

        // Pool local to this build; the global rayon pool is never touched.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers.max(1))
            .build()
            .map_err(|e| {
                Error::new(ErrorKind::Internal, format!("cannot build worker pool: {}", e))
            })?;

        let (grouped_tx, grouped_rx) = bounded::<GroupedData>(self.config.queue_capacity);
        let warnings: Mutex<Vec<BuildWarning>> = Mutex::new(Vec::new());

        let mut trie = TrieIndex::new();
        let mut pairs_merged = 0usize;

        pool.in_place_scope(|scope| {
            for id in ids {
                let grouped_tx = grouped_tx.clone();
                let progress = &self.progress;
                let warnings = &warnings;
                scope.spawn(move |_| {
                    match source.fetch(&id) {
                        Ok(text) => {
                            let tokens = analyzer.analyze(&text);
                            let grouped = group_pairs(map_document(&id, tokens));
                            let _ = grouped_tx.send(grouped);
                        }
                        Err(e) => {
                            warn!("skipping document {}: {}", id, e);
                            warnings.lock().push(BuildWarning {
                                doc_id: id,
                                reason: e.to_string(),
                            });
                        }
                    }
                    progress.fetch_add(1, Ordering::Relaxed);
                });
            }
            drop(grouped_tx);

            // Single-writer merge on the calling thread, draining units as
            // workers finish them. Ends once every sender is gone.
            for grouped in grouped_rx.iter() {
                for (token, doc_ids) in grouped {
                    for doc_id in doc_ids {
                        trie.insert(&token, doc_id);
                        pairs_merged += 1;
                    }
                }
            }
        });

        let warnings = warnings.into_inner();
        let stats = BuildStats {
            started_at,
            elapsed_ms: clock.elapsed().as_millis() as u64,
            workers: self.config.workers,
            documents_indexed: total - warnings.len(),
            documents_skipped: warnings.len(),
            pairs_merged,
            distinct_terms: trie.term_count(),
            warnings,
        };
        info!(
            "index built: {} documents, {} distinct terms, {} skipped, {} ms",
            stats.documents_indexed, stats.distinct_terms, stats.documents_skipped, stats.elapsed_ms
        );

        Ok((trie, stats))
    }
}

impl Default for BuildCoordinator {
    fn default() -> Self {
        BuildCoordinator::new(BuildConfig::default())
    }
}

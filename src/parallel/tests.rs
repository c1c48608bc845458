//! Build Coordinator Tests
//!
//! Covers the end-to-end indexing scenario, worker-count determinism and
//! per-document failure isolation.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::filters::stopword::StopWordFilter;
    use crate::core::error::{Error, ErrorKind, Result};
    use crate::core::types::DocId;
    use crate::parallel::coordinator::BuildCoordinator;
    use crate::query::evaluator::QueryEvaluator;
    use crate::source::{DocumentSource, FsDocumentSource, MemoryDocumentSource};

    fn doc(id: &str) -> DocId {
        DocId::new(id)
    }

    fn set(ids: &[&str]) -> HashSet<DocId> {
        ids.iter().map(|id| doc(id)).collect()
    }

    // ============================================================
    // END-TO-END SCENARIO
    // ============================================================

    #[test]
    fn test_end_to_end_cat_dog() {
        let source = MemoryDocumentSource::from_pairs([
            ("d1", "the cat sat"),
            ("d2", "the dog sat"),
        ]);
        let coordinator = BuildCoordinator::with_workers(2);

        let (trie, stats) = coordinator.build(&source, &Analyzer::ascii()).unwrap();
        assert_eq!(stats.documents_indexed, 2);
        assert_eq!(stats.documents_skipped, 0);

        let evaluator = QueryEvaluator::new(Arc::new(trie));
        assert_eq!(evaluator.search("cat").unwrap(), set(&["d1"]));
        assert_eq!(evaluator.search("cat OR dog").unwrap(), set(&["d1", "d2"]));
        assert!(evaluator.search("cat AND dog").unwrap().is_empty());
        assert_eq!(evaluator.search("sat").unwrap(), set(&["d1", "d2"]));
    }

    #[test]
    fn test_build_applies_stop_words() {
        let source = MemoryDocumentSource::from_pairs([("d1", "el gato la casa")]);
        let analyzer = Analyzer::ascii_with_stop_words(StopWordFilter::new(vec![
            "el".to_string(),
            "la".to_string(),
        ]));

        let (trie, _) = BuildCoordinator::with_workers(1)
            .build(&source, &analyzer)
            .unwrap();

        let mut terms = trie.terms();
        terms.sort();
        assert_eq!(terms, vec!["casa", "gato"]);
    }

    #[test]
    fn test_build_empty_corpus() {
        let source = MemoryDocumentSource::new();

        let (trie, stats) = BuildCoordinator::with_workers(2)
            .build(&source, &Analyzer::ascii())
            .unwrap();

        assert!(trie.is_empty());
        assert_eq!(stats.documents_indexed, 0);
        assert_eq!(stats.pairs_merged, 0);
    }

    #[test]
    fn test_duplicate_occurrences_collapse_in_postings() {
        let source = MemoryDocumentSource::from_pairs([("d1", "eco eco eco")]);

        let (trie, stats) = BuildCoordinator::with_workers(2)
            .build(&source, &Analyzer::ascii())
            .unwrap();

        // three mapped pairs, one posting
        assert_eq!(stats.pairs_merged, 3);
        assert_eq!(trie.lookup("eco").len(), 1);
    }

    // ============================================================
    // DETERMINISM ACROSS WORKER COUNTS
    // ============================================================

    #[test]
    fn test_build_deterministic_across_worker_counts() {
        let docs: Vec<(String, String)> = (0..24)
            .map(|i| {
                let id = format!("doc{}.txt", i);
                let text = format!(
                    "word{} shared common tema{} shared palabra{}",
                    i % 7,
                    i % 3,
                    i
                );
                (id, text)
            })
            .collect();
        let source = MemoryDocumentSource::from_pairs(docs);

        let (baseline, _) = BuildCoordinator::with_workers(1)
            .build(&source, &Analyzer::ascii())
            .unwrap();

        for workers in [2, 4, 8] {
            let (trie, _) = BuildCoordinator::with_workers(workers)
                .build(&source, &Analyzer::ascii())
                .unwrap();

            let mut expected = baseline.terms();
            let mut actual = trie.terms();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "term sets differ at {} workers", workers);

            for term in &expected {
                assert_eq!(
                    trie.lookup(term),
                    baseline.lookup(term),
                    "postings differ for {:?} at {} workers",
                    term,
                    workers
                );
            }
        }
    }

    // ============================================================
    // FAILURE ISOLATION
    // ============================================================

    /// Source whose listing includes a document that can never be read.
    struct FlakySource {
        inner: MemoryDocumentSource,
        broken: DocId,
    }

    impl DocumentSource for FlakySource {
        fn ids(&self) -> Result<Vec<DocId>> {
            let mut ids = self.inner.ids()?;
            ids.push(self.broken.clone());
            ids.sort();
            Ok(ids)
        }

        fn fetch(&self, id: &DocId) -> Result<String> {
            if *id == self.broken {
                return Err(Error::new(
                    ErrorKind::UnreadableDocument,
                    format!("cannot read document {}", id),
                ));
            }
            self.inner.fetch(id)
        }
    }

    #[test]
    fn test_unreadable_document_is_skipped_with_warning() {
        let source = FlakySource {
            inner: MemoryDocumentSource::from_pairs([
                ("d1", "the cat sat"),
                ("d2", "the dog sat"),
            ]),
            broken: doc("broken.txt"),
        };

        let (trie, stats) = BuildCoordinator::with_workers(2)
            .build(&source, &Analyzer::ascii())
            .unwrap();

        assert_eq!(stats.documents_indexed, 2);
        assert_eq!(stats.documents_skipped, 1);
        assert_eq!(stats.warnings.len(), 1);
        assert_eq!(stats.warnings[0].doc_id, doc("broken.txt"));

        // the rest of the corpus made it in
        assert_eq!(trie.lookup("sat"), set(&["d1", "d2"]));
    }

    // ============================================================
    // FILESYSTEM CORPUS
    // ============================================================

    #[test]
    fn test_build_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("uno.txt"), "El gato duerme.\n").unwrap();
        std::fs::write(dir.path().join("dos.txt"), "El perro ladra.\n").unwrap();
        std::fs::write(dir.path().join("ignorado.md"), "no soy parte del corpus").unwrap();

        let source = FsDocumentSource::new(dir.path());
        let (trie, stats) = BuildCoordinator::default()
            .build(&source, &Analyzer::ascii())
            .unwrap();

        assert_eq!(stats.documents_indexed, 2);
        assert_eq!(trie.lookup("gato"), set(&["uno.txt"]));
        assert_eq!(trie.lookup("el"), set(&["uno.txt", "dos.txt"]));
        assert!(trie.lookup("corpus").is_empty());
    }

    #[test]
    fn test_progress_reaches_total() {
        let source = MemoryDocumentSource::from_pairs([
            ("d1", "uno"),
            ("d2", "dos"),
            ("d3", "tres"),
        ]);
        let coordinator = BuildCoordinator::with_workers(2);

        coordinator.build(&source, &Analyzer::ascii()).unwrap();
        assert_eq!(coordinator.get_progress(), 3);
    }
}

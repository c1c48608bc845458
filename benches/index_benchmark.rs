use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::sync::Arc;
use tridex::analysis::analyzer::Analyzer;
use tridex::core::types::DocId;
use tridex::index::trie::TrieIndex;
use tridex::parallel::coordinator::BuildCoordinator;
use tridex::query::evaluator::QueryEvaluator;
use tridex::source::MemoryDocumentSource;

/// Helper to create a synthetic corpus of `docs` documents of `words` words each
fn create_test_corpus(docs: usize, words: usize) -> MemoryDocumentSource {
    let mut rng = rand::thread_rng();
    let vocabulary = [
        "el", "gato", "perro", "casa", "libro", "rust", "indice", "palabra",
        "texto", "dato", "nodo", "arbol", "consulta", "documento", "corpus",
    ];

    let mut source = MemoryDocumentSource::new();
    for i in 0..docs {
        let text: String = (0..words)
            .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
            .collect::<Vec<_>>()
            .join(" ");
        source.insert(format!("doc{}.txt", i), text);
    }
    source
}

/// Benchmark the full build at different worker counts
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    let source = create_test_corpus(200, 500);
    let analyzer = Analyzer::ascii();

    for workers in [1, 2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            workers,
            |b, &workers| {
                let coordinator = BuildCoordinator::with_workers(workers);
                b.iter(|| {
                    let (trie, _) = coordinator.build(&source, &analyzer).unwrap();
                    black_box(trie)
                });
            },
        );
    }
    group.finish();
}

/// Benchmark trie insert throughput
fn bench_trie_insert(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let tokens: Vec<String> = (0..10_000)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len)
                .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
                .collect()
        })
        .collect();

    c.bench_function("trie_insert_10k", |b| {
        b.iter(|| {
            let mut trie = TrieIndex::new();
            for (i, token) in tokens.iter().enumerate() {
                trie.insert(token, DocId::new(format!("doc{}", i % 50)));
            }
            black_box(trie)
        });
    });
}

/// Benchmark query evaluation against a prebuilt index
fn bench_query(c: &mut Criterion) {
    let source = create_test_corpus(500, 300);
    let (trie, _) = BuildCoordinator::with_workers(4)
        .build(&source, &Analyzer::ascii())
        .unwrap();
    let evaluator = QueryEvaluator::new(Arc::new(trie));

    c.bench_function("query_single_term", |b| {
        b.iter(|| black_box(evaluator.search("gato").unwrap()));
    });

    c.bench_function("query_and", |b| {
        b.iter(|| black_box(evaluator.search("gato AND perro").unwrap()));
    });

    c.bench_function("query_or", |b| {
        b.iter(|| black_box(evaluator.search("gato OR perro").unwrap()));
    });
}

criterion_group!(benches, bench_build, bench_trie_insert, bench_query);
criterion_main!(benches);

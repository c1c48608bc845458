use std::sync::Arc;
use tridex::analysis::analyzer::Analyzer;
use tridex::analysis::filters::stopword::StopWordFilter;
use tridex::core::config::BuildConfig;
use tridex::net::server::SearchServer;
use tridex::parallel::coordinator::BuildCoordinator;
use tridex::query::evaluator::QueryEvaluator;
use tridex::source::FsDocumentSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut docs_dir: Option<String> = None;
    let mut stop_words_path: Option<String> = None;
    let mut bind_addr = "127.0.0.1:4000".to_string();
    let mut workers: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--docs" => {
                docs_dir = Some(args[i + 1].clone());
                i += 2;
            }
            "--stop-words" => {
                stop_words_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--bind" => {
                bind_addr = args[i + 1].clone();
                i += 2;
            }
            "--workers" => {
                workers = Some(args[i + 1].parse()?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(docs_dir) = docs_dir else {
        eprintln!(
            "Usage: {} --docs <dir> --stop-words <file> [--bind <addr:port>] [--workers <n>]",
            args[0]
        );
        eprintln!(
            "Example: {} --docs ./textos --stop-words ./textos/stop_words_spanish.txt",
            args[0]
        );
        std::process::exit(1);
    };

    // Indexing without a stop-word list is a caller decision, never a
    // silent fallback.
    let analyzer = match &stop_words_path {
        Some(path) => {
            let stop_words = StopWordFilter::from_path(path)?;
            tracing::info!("loaded {} stop words from {}", stop_words.stop_words.len(), path);
            Analyzer::ascii_with_stop_words(stop_words)
        }
        None => {
            tracing::info!("no --stop-words given, indexing without stop-word filtering");
            Analyzer::ascii()
        }
    };

    let config = match workers {
        Some(n) => BuildConfig::with_workers(n),
        None => BuildConfig::default(),
    };
    let source = FsDocumentSource::new(&docs_dir);
    let coordinator = BuildCoordinator::new(config);

    let (trie, stats) = coordinator.build(&source, &analyzer)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    let evaluator = Arc::new(QueryEvaluator::new(Arc::new(trie)));
    let server = SearchServer::bind(&bind_addr, evaluator).await?;
    server.run().await?;

    Ok(())
}

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};
use crate::core::error::Result;
use crate::query::evaluator::QueryEvaluator;

/// Line-oriented TCP front end for the query evaluator. One connected
/// client per task; the index behind the evaluator is read-only, so
/// clients share it without coordination.
pub struct SearchServer {
    listener: TcpListener,
    evaluator: Arc<QueryEvaluator>,
}

impl SearchServer {
    pub async fn bind(addr: &str, evaluator: Arc<QueryEvaluator>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("search server listening on {}", listener.local_addr()?);
        Ok(SearchServer { listener, evaluator })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts clients forever. Per-client failures end that client only.
    pub async fn run(self) -> Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            info!("client connected: {}", peer);
            let evaluator = self.evaluator.clone();
            tokio::spawn(async move {
                if let Err(e) = handle_client(stream, evaluator).await {
                    warn!("client {}: {}", peer, e);
                }
                info!("client disconnected: {}", peer);
            });
        }
    }
}

async fn handle_client(
    stream: TcpStream,
    evaluator: Arc<QueryEvaluator>,
) -> std::io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let response = render_response(query, &evaluator);
        writer.write_all(response.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}

/// One response block per query, terminated by a blank line so clients can
/// tell where it ends.
pub fn render_response(query: &str, evaluator: &QueryEvaluator) -> String {
    match evaluator.search(query) {
        Err(e) => format!("error: {}\n\n", e),
        Ok(result) if result.is_empty() => format!("No results found for: {}\n\n", query),
        Ok(result) => {
            let mut names: Vec<String> = result.into_iter().map(|id| id.0).collect();
            names.sort();

            let mut out = String::from("Documents found:\n");
            for name in names {
                out.push_str("   - ");
                out.push_str(&name);
                out.push('\n');
            }
            out.push('\n');
            out
        }
    }
}

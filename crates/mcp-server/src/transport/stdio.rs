//! stdio transport for MCP (used by Claude Desktop)

use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::protocol::RequestHandler;

/// stdio transport for MCP protocol.
///
/// Every request runs on its own task; responses go through a single writer
/// task so concurrent replies never interleave within a line.
pub struct StdioTransport {
    handler: Arc<RequestHandler>,
}

impl StdioTransport {
    pub fn new(handler: Arc<RequestHandler>) -> Self {
        Self { handler }
    }

    /// Serve stdin/stdout until EOF
    pub async fn run(&self) -> anyhow::Result<()> {
        info!("Starting MCP server on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve newline-delimited JSON-RPC over any byte stream pair
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(write_lines(writer, rx));

        let mut lines = BufReader::new(reader).lines();
        let mut in_flight = RequestTasks::default();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            debug!("Received: {}", line);

            let handler = self.handler.clone();
            let tx = tx.clone();
            in_flight.spawn(async move {
                let Some(response) = handler.handle_line(&line).await else {
                    return;
                };
                match serde_json::to_string(&response) {
                    Ok(text) => {
                        let _ = tx.send(text);
                    }
                    Err(e) => error!("Failed to serialize response: {}", e),
                }
            });
        }

        info!("EOF received, shutting down");

        in_flight.drain().await;
        drop(tx);
        writer_task.await??;

        Ok(())
    }
}

/// Per-request tasks of one connection; finished tasks are reaped on every spawn
#[derive(Default)]
struct RequestTasks {
    set: JoinSet<()>,
}

impl RequestTasks {
    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        while self.set.try_join_next().is_some() {}
        self.set.spawn(task);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.set.len()
    }

    /// Wait for every outstanding request
    async fn drain(&mut self) {
        while self.set.join_next().await.is_some() {}
    }
}

async fn write_lines<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<String>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(line) = rx.recv().await {
        debug!("Sending: {}", line);
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

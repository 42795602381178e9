//! JSON-RPC correlation over the MCP server's standard streams

use bitbadges_mcp::tools::CONFIGURE_TOOL;
use bitbadges_mcp::McpMessage;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use crate::error::{RelayError, RelayResult};
use crate::pending::PendingRequests;

/// Default per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

type Writer = Box<dyn AsyncWrite + Send + Unpin>;

/// Writes requests to the current MCP server process and matches responses by id
pub struct McpRelay {
    writer: Mutex<Option<Writer>>,
    pending: PendingRequests,
    timeout: Duration,
}

impl McpRelay {
    pub fn new(timeout: Duration) -> Self {
        Self {
            writer: Mutex::new(None),
            pending: PendingRequests::new(),
            timeout,
        }
    }

    /// Route requests to a newly started server
    pub async fn attach(&self, writer: impl AsyncWrite + Send + Unpin + 'static) {
        *self.writer.lock().await = Some(Box::new(writer));
    }

    /// Forget the current server; requests fail until the next attach
    pub async fn detach(&self) {
        *self.writer.lock().await = None;
    }

    pub async fn is_available(&self) -> bool {
        self.writer.lock().await.is_some()
    }

    pub async fn pending_count(&self) -> usize {
        self.pending.len().await
    }

    /// Send one request and wait for the response with the same id.
    ///
    /// Fails immediately when no server is attached; there is no queue.
    /// Acquiring the writer, writing and waiting share one deadline.
    pub async fn send_request(&self, method: &str, params: Value) -> RelayResult<Value> {
        let deadline = Instant::now() + self.timeout;

        let (id, rx) = {
            let Ok(mut writer) = timeout_at(deadline, self.writer.lock()).await else {
                warn!("MCP request ({}) timed out waiting for the writer", method);
                return Err(RelayError::Timeout);
            };
            let Some(writer) = writer.as_mut() else {
                return Err(RelayError::Unavailable);
            };

            let (id, rx) = self.pending.register().await;
            info!("Sending MCP request {} ({})", id, method);

            match timeout_at(deadline, write_request(writer, id, method, params)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.pending.cancel(id).await;
                    return Err(e);
                }
                Err(_) => {
                    self.pending.cancel(id).await;
                    warn!("MCP request {} ({}) timed out while writing", id, method);
                    return Err(RelayError::Timeout);
                }
            }
            (id, rx)
        };

        match timeout_at(deadline, rx).await {
            Ok(Ok(response)) => into_result(response),
            Ok(Err(_)) => Err(RelayError::Unavailable),
            Err(_) => {
                self.pending.cancel(id).await;
                warn!("MCP request {} ({}) timed out", id, method);
                Err(RelayError::Timeout)
            }
        }
    }

    /// Feed one line of server stdout.
    ///
    /// Returns `true` when the line completed a pending request.
    pub async fn handle_output_line(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        if !line.starts_with('{') {
            info!("MCP Output: {}", line);
            return false;
        }

        let response: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Error parsing MCP response: {}", e);
                return false;
            }
        };

        let Some(id) = response.get("id").and_then(Value::as_u64) else {
            debug!("MCP message without numeric id: {}", line);
            return false;
        };

        let delivered = self.pending.complete(id, response).await;
        if !delivered {
            debug!("No pending request for id {}", id);
        }
        delivered
    }

    pub async fn list_tools(&self) -> RelayResult<Value> {
        self.send_request("tools/list", json!({})).await
    }

    pub async fn call_tool(&self, name: &str, arguments: Value) -> RelayResult<Value> {
        self.send_request("tools/call", json!({"name": name, "arguments": arguments}))
            .await
    }

    /// Configure the server with `api_key` first, unless the call is configure itself
    pub async fn call_tool_with_api_key(
        &self,
        name: &str,
        arguments: Value,
        api_key: Option<&str>,
    ) -> RelayResult<Value> {
        if let Some(key) = api_key {
            if name != CONFIGURE_TOOL {
                self.call_tool(CONFIGURE_TOOL, json!({"apiKey": key})).await?;
            }
        }
        self.call_tool(name, arguments).await
    }
}

async fn write_request(writer: &mut Writer, id: u64, method: &str, params: Value) -> RelayResult<()> {
    let mut line = serde_json::to_string(&McpMessage::request(id, method, Some(params)))?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// The `result` member of a response, or its `error` as [`RelayError::Rpc`]
fn into_result(mut response: Value) -> RelayResult<Value> {
    if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
        return Err(RelayError::Rpc {
            code: error.get("code").and_then(Value::as_i64).unwrap_or(0),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string(),
        });
    }
    Ok(response.get_mut("result").map(Value::take).unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, BufReader, DuplexStream, Lines};

    /// Relay attached to an in-memory pipe; the returned lines are what the server would read
    async fn attached(timeout: Duration) -> (Arc<McpRelay>, Lines<BufReader<DuplexStream>>) {
        let relay = Arc::new(McpRelay::new(timeout));
        let (client, server) = tokio::io::duplex(64 * 1024);
        relay.attach(client).await;
        (relay, BufReader::new(server).lines())
    }

    #[tokio::test]
    async fn test_unavailable_without_server() {
        let relay = McpRelay::new(REQUEST_TIMEOUT);
        assert!(matches!(relay.list_tools().await, Err(RelayError::Unavailable)));
        assert_eq!(relay.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_response_matched_by_id() {
        let (relay, mut requests) = attached(REQUEST_TIMEOUT).await;

        let server = {
            let relay = relay.clone();
            tokio::spawn(async move {
                let line = requests.next_line().await.unwrap().unwrap();
                let request: Value = serde_json::from_str(&line).unwrap();
                assert_eq!(request["method"], "tools/call");
                assert_eq!(request["params"]["name"], "bitbadges_getStatus");

                assert!(!relay.handle_output_line("BitBadges MCP server running").await);
                assert!(!relay.handle_output_line(r#"{"jsonrpc":"2.0","id":999,"result":{}}"#).await);
                let reply = json!({"jsonrpc": "2.0", "id": request["id"], "result": {"ok": true}});
                assert!(relay.handle_output_line(&reply.to_string()).await);
            })
        };

        let result = relay.call_tool("bitbadges_getStatus", json!({})).await.unwrap();
        assert_eq!(result, json!({"ok": true}));
        server.await.unwrap();
        assert_eq!(relay.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_rpc_error_is_surfaced() {
        let (relay, mut requests) = attached(REQUEST_TIMEOUT).await;

        let server = {
            let relay = relay.clone();
            tokio::spawn(async move {
                let line = requests.next_line().await.unwrap().unwrap();
                let request: Value = serde_json::from_str(&line).unwrap();
                let reply = json!({
                    "jsonrpc": "2.0",
                    "id": request["id"],
                    "error": {"code": -32601, "message": "Method not found"}
                });
                relay.handle_output_line(&reply.to_string()).await;
            })
        };

        let err = relay.send_request("resources/list", json!({})).await.unwrap_err();
        assert!(matches!(err, RelayError::Rpc { code: -32601, .. }));
        server.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_removes_pending_entry() {
        let (relay, _requests) = attached(REQUEST_TIMEOUT).await;

        let err = relay.list_tools().await.unwrap_err();
        assert!(matches!(err, RelayError::Timeout));
        assert_eq!(relay.pending_count().await, 0);

        // Late arrival for the timed-out id is ignored
        assert!(!relay.handle_output_line(r#"{"jsonrpc":"2.0","id":1,"result":{}}"#).await);
    }

    #[tokio::test]
    async fn test_write_failure_cancels_request() {
        let relay = McpRelay::new(REQUEST_TIMEOUT);
        let (client, server) = tokio::io::duplex(1024);
        drop(server);
        relay.attach(client).await;

        assert!(matches!(relay.list_tools().await, Err(RelayError::Io(_))));
        assert_eq!(relay.pending_count().await, 0);
    }

    #[tokio::test]
    async fn test_api_key_configures_first() {
        let (relay, mut requests) = attached(REQUEST_TIMEOUT).await;

        let server = {
            let relay = relay.clone();
            tokio::spawn(async move {
                let mut seen = Vec::new();
                for _ in 0..2 {
                    let line = requests.next_line().await.unwrap().unwrap();
                    let request: Value = serde_json::from_str(&line).unwrap();
                    seen.push(request["params"].clone());
                    let reply = json!({"jsonrpc": "2.0", "id": request["id"], "result": {}});
                    relay.handle_output_line(&reply.to_string()).await;
                }
                seen
            })
        };

        relay
            .call_tool_with_api_key("bitbadges_getStatus", json!({}), Some("k1"))
            .await
            .unwrap();

        let seen = server.await.unwrap();
        assert_eq!(seen[0], json!({"name": CONFIGURE_TOOL, "arguments": {"apiKey": "k1"}}));
        assert_eq!(seen[1]["name"], "bitbadges_getStatus");
    }

    #[tokio::test]
    async fn test_detach_makes_relay_unavailable() {
        let (relay, _requests) = attached(REQUEST_TIMEOUT).await;
        assert!(relay.is_available().await);
        relay.detach().await;
        assert!(!relay.is_available().await);
        assert!(matches!(relay.list_tools().await, Err(RelayError::Unavailable)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_write_times_out_and_releases_writer() {
        let relay = McpRelay::new(REQUEST_TIMEOUT);
        // Server end stays open but is never read, so the write blocks once the pipe is full
        let (client, _server) = tokio::io::duplex(16);
        relay.attach(client).await;

        let err = relay.call_tool("bitbadges_getStatus", json!({})).await.unwrap_err();
        assert!(matches!(err, RelayError::Timeout));
        assert_eq!(relay.pending_count().await, 0);

        relay.detach().await;
        assert!(!relay.is_available().await);
    }
}

//! MCP request handler

use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::capabilities::ServerCapabilities;
use super::types::*;
use crate::tools::Gateway;

/// Server name reported by `initialize`
pub const SERVER_NAME: &str = "bitbadges-mcp";

/// Handler for MCP requests.
///
/// Takes `&self` everywhere so one handler can serve concurrent requests.
pub struct RequestHandler {
    gateway: Arc<Gateway>,
    server_version: String,
    initialized: AtomicBool,
}

impl RequestHandler {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Handle one raw line; unparsable input yields a parse error with a null id
    pub async fn handle_line(&self, line: &str) -> Option<McpMessage> {
        match serde_json::from_str::<McpMessage>(line) {
            Ok(message) => self.handle(message).await,
            Err(e) => {
                warn!("Failed to parse message: {}", e);
                Some(McpMessage::error_response(None, McpError::parse_error()))
            }
        }
    }

    /// Handle an incoming message
    pub async fn handle(&self, message: McpMessage) -> Option<McpMessage> {
        if message.is_request() {
            let McpMessage { id, method, params, .. } = message;
            let (Some(id), Some(method)) = (id, method) else {
                return None;
            };

            debug!("Handling request: {}", method);

            let result = match method.as_str() {
                "initialize" => self.handle_initialize(params),
                "ping" => Ok(serde_json::json!({})),
                "tools/list" => self.handle_tools_list(),
                "tools/call" => self.handle_tools_call(params).await,
                _ => Err(McpError::method_not_found()),
            };

            Some(match result {
                Ok(result) => McpMessage::response(id, result),
                Err(error) => McpMessage::error_response(Some(id), error),
            })
        } else if message.is_notification() {
            match message.method.as_deref() {
                Some("notifications/initialized" | "initialized") => {
                    info!("Client initialized");
                }
                Some("notifications/cancelled") => {
                    debug!("Request cancelled");
                }
                other => {
                    debug!("Unknown notification: {:?}", other);
                }
            }

            None
        } else if message.is_response() {
            debug!("Received unexpected response");
            None
        } else {
            Some(McpMessage::error_response(message.id, McpError::invalid_request()))
        }
    }

    fn handle_initialize(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: Option<InitializeParams> = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?;

        match &params {
            Some(p) => info!(
                "Initializing session with client: {} v{} (protocol {})",
                p.client_info.name, p.client_info.version, p.protocol_version
            ),
            None => info!("Initializing session"),
        }

        self.initialized.store(true, Ordering::Release);

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities::with_tools(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: self.server_version.clone(),
            },
        };

        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    fn handle_tools_list(&self) -> Result<Value, McpError> {
        let result = ToolsListResult {
            tools: self.gateway.list(),
        };
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ToolCallParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::invalid_params(e.to_string()))?
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        debug!("Calling tool: {}", params.name);

        let result = self.gateway.call(&params.name, params.arguments).await;
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string()))
    }
}

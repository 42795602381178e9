//! Main MCP server orchestration

use std::sync::Arc;
use tracing::info;

use crate::protocol::RequestHandler;
use crate::tools::Gateway;
use crate::transport::{HttpTransport, StdioTransport};

/// Server mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerMode {
    /// stdio transport (for Claude Desktop)
    #[default]
    Stdio,
    /// HTTP/SSE transport
    Http { port: u16 },
}

/// MCP server
pub struct McpServer {
    handler: Arc<RequestHandler>,
    mode: ServerMode,
}

impl McpServer {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            handler: Arc::new(RequestHandler::new(Arc::new(gateway))),
            mode: ServerMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ServerMode) -> Self {
        self.mode = mode;
        self
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        match self.mode {
            ServerMode::Stdio => {
                info!("Starting MCP server in stdio mode");
                StdioTransport::new(self.handler.clone()).run().await
            }
            ServerMode::Http { port } => {
                info!("Starting MCP server in HTTP mode on port {}", port);
                HttpTransport::new(self.handler.clone(), port).run().await
            }
        }
    }
}

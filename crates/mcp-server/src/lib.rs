//! # bitbadges-mcp
//!
//! Exposes the BitBadges REST API as MCP tools.
//!
//! Tools are synthesized from the BitBadges OpenAPI document, rendered into a
//! Rust dispatch module by `bitbadges-mcp generate`, and served over stdio or
//! HTTP/SSE by a [`Gateway`](tools::Gateway) that forwards each call upstream.

pub mod error;
pub mod generate;
mod generated;
pub mod protocol;
mod server;
pub mod tools;
pub mod transport;

pub use error::{GatewayError, GenerateError};
pub use protocol::{McpError, McpMessage, ServerCapabilities, ToolCallResult};
pub use server::{McpServer, ServerMode};
pub use tools::{Catalog, Gateway, ToolDescriptor};
pub use transport::{HttpTransport, StdioTransport};

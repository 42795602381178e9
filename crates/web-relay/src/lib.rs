//! # web-relay
//!
//! Browser chat front end for the BitBadges MCP server.
//!
//! The relay keeps one `bitbadges-mcp serve --stdio` subprocess alive under a
//! [`Supervisor`], correlates JSON-RPC responses with requests by id in
//! [`McpRelay`], and serves browsers over a WebSocket plus a small HTTP API.

pub mod chat;
pub mod error;
pub mod http;
pub mod pending;
pub mod relay;
pub mod session;
pub mod socket;
pub mod supervisor;

pub use error::{RelayError, RelayResult};
pub use http::{AppState, WebServer};
pub use relay::McpRelay;
pub use session::SessionStore;
pub use supervisor::{Supervisor, SupervisorConfig};

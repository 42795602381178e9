//! Relay error types

use thiserror::Error;

/// Failures of a relayed request
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Request timeout")]
    Timeout,

    #[error("MCP server not available")]
    Unavailable,

    #[error("MCP server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON-RPC error object returned by the MCP server
    #[error("MCP error {code}: {message}")]
    Rpc { code: i64, message: String },
}

pub type RelayResult<T> = Result<T, RelayError>;

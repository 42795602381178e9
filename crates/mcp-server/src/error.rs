//! Error types for tool dispatch and source generation

use thiserror::Error;

/// Failures surfaced by the gateway while executing a tool.
///
/// Every variant is converted into an `isError` tool result at the dispatch
/// boundary; none of them escape a `tools/call`.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API key not configured. Use bitbadges_configure tool first.")]
    NotConfigured,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("API Error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Network Error: No response received from API ({0})")]
    Network(String),

    #[error("Request Error: {0}")]
    RequestConstruction(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl GatewayError {
    /// Classify a transport-level reqwest failure
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            GatewayError::RequestConstruction(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

/// Failures of the fetch → synthesize → render pipeline
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Fetch(#[from] openapi_parser::ParseError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

//! # openapi-parser
//!
//! OpenAPI 3.x fetcher and parser for the BitBadges MCP bridge.
//! Turns a YAML or JSON document into an ordered list of operations with
//! `$ref`s resolved against the document's components.

mod types;
mod parser;
mod operations;
mod resolver;
mod error;

pub use types::*;
pub use parser::{OpenApiParser, BITBADGES_OPENAPI_URL};
pub use operations::OperationExtractor;
pub use resolver::ComponentResolver;
pub use error::{ParseError, ParseResult};

//! Tool synthesis, code generation and execution

mod catalog;
mod config;
mod emitter;
mod gateway;
mod route;
mod router;
mod synthesizer;

pub use catalog::{Catalog, InputSchema, ToolDescriptor, ToolMetadata};
pub use config::{configure_tool, GatewayConfig, CONFIGURE_TOOL, DEFAULT_BASE_URL};
pub use emitter::SourceEmitter;
pub use gateway::{Gateway, API_KEY_HEADER, API_VERSION, REQUEST_TIMEOUT};
pub use route::{fill_template, path_arg, placeholders, strip_version_prefix, Route};
pub use router::{CatalogRouter, GeneratedRouter, ToolRouter};
pub use synthesizer::{SynthesisOptions, ToolSynthesizer};

//! Fetch → synthesize → render pipeline behind `bitbadges-mcp generate`

use openapi_parser::{OpenApiParser, BITBADGES_OPENAPI_URL};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::GenerateError;
use crate::tools::{SourceEmitter, SynthesisOptions, ToolSynthesizer};

/// Where the document comes from and where the artifacts go
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub url: String,
    /// Local document read instead of fetching `url`
    pub spec_file: Option<PathBuf>,
    /// Generated Rust module, overwritten in full
    pub output: PathBuf,
    /// Raw document text, kept for inspection
    pub save_spec: Option<PathBuf>,
    /// Catalog JSON, servable later with `serve --spec`
    pub catalog_json: Option<PathBuf>,
    pub synthesis: SynthesisOptions,
}

impl GenerateOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            url: BITBADGES_OPENAPI_URL.to_string(),
            spec_file: None,
            output: output.into(),
            save_spec: None,
            catalog_json: None,
            synthesis: SynthesisOptions::bitbadges(),
        }
    }
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub operations: usize,
    pub tools: usize,
}

pub async fn generate(options: &GenerateOptions) -> Result<GenerateSummary, GenerateError> {
    let text = match &options.spec_file {
        Some(path) => {
            info!("Reading OpenAPI document from {}", path.display());
            std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
                path: path.display().to_string(),
                source,
            })?
        }
        None => {
            info!("Fetching OpenAPI document from {}", options.url);
            OpenApiParser::fetch(&options.url).await?
        }
    };

    if let Some(path) = &options.save_spec {
        write_file(path, &text)?;
        info!("Saved OpenAPI document to {}", path.display());
    }

    let spec = OpenApiParser::parse(&text)?;
    info!(
        "Parsed {} v{} with {} operations",
        spec.title,
        spec.version,
        spec.operations.len()
    );

    let catalog = ToolSynthesizer::new(options.synthesis.clone()).synthesize(&spec);

    if let Some(path) = &options.catalog_json {
        write_file(path, &catalog.to_json_pretty()?)?;
        info!("Saved tool catalog to {}", path.display());
    }

    SourceEmitter::write(&catalog, &options.output)?;

    Ok(GenerateSummary {
        operations: spec.operations.len(),
        tools: catalog.len(),
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    std::fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.display().to_string(),
        source,
    })
}

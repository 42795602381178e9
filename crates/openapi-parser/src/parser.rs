//! Main OpenAPI parser

use regex::{Captures, Regex};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ParseError, ParseResult};
use crate::operations::OperationExtractor;
use crate::types::*;

/// Location of the published BitBadges OpenAPI document
pub const BITBADGES_OPENAPI_URL: &str =
    "https://raw.githubusercontent.com/BitBadges/bitbadgesjs/main/packages/bitbadgesjs-sdk/openapi/combined_processed.yaml";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAPI 3.x parser
pub struct OpenApiParser;

impl OpenApiParser {
    /// Parse an OpenAPI spec from a string (auto-detects JSON/YAML)
    pub fn parse(content: &str) -> ParseResult<ParsedSpec> {
        if content.trim().starts_with('{') {
            Self::parse_json(content)
        } else {
            Self::parse_yaml(content)
        }
    }

    /// Parse an OpenAPI spec from JSON
    pub fn parse_json(content: &str) -> ParseResult<ParsedSpec> {
        let content = Self::sanitize_large_numbers(content);
        let raw_spec: RawOpenApiSpec = serde_json::from_str(&content)?;
        Self::convert_spec(raw_spec)
    }

    /// Parse an OpenAPI spec from YAML
    pub fn parse_yaml(content: &str) -> ParseResult<ParsedSpec> {
        if content.trim().is_empty() {
            return Err(ParseError::InvalidFormat("document is empty".to_string()));
        }
        let content = Self::sanitize_large_numbers(content);
        let raw_spec: RawOpenApiSpec = serde_yaml::from_str(&content)?;
        Self::convert_spec(raw_spec)
    }

    /// Clamp min/max literals too large for serde's number types.
    ///
    /// Generated SDK schemas sometimes carry 64-bit bounds that overflow
    /// during YAML-to-JSON conversion; their exact value is irrelevant here.
    fn sanitize_large_numbers(content: &str) -> String {
        static LARGE_BOUND: OnceLock<Regex> = OnceLock::new();
        let re = LARGE_BOUND.get_or_init(|| {
            Regex::new(r"(?m)^(\s*(?:minimum|maximum|exclusiveMinimum|exclusiveMaximum):\s*)(-?\d{16,})")
                .expect("valid regex")
        });

        re.replace_all(content, |caps: &Captures| {
            if caps[2].starts_with('-') {
                format!("{}-2147483648", &caps[1])
            } else {
                format!("{}2147483647", &caps[1])
            }
        })
        .into_owned()
    }

    /// Download the raw text of an OpenAPI document
    pub async fn fetch(url: &str) -> ParseResult<String> {
        info!("Fetching OpenAPI spec from: {}", url);

        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ParseError::HttpError(e.to_string()))?;

        let response = client
            .get(url)
            .header("Accept", "application/json, application/yaml, text/yaml")
            .send()
            .await
            .map_err(|e| ParseError::FetchError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParseError::FetchError(format!("HTTP {} from {}", status, url)));
        }

        let content = response
            .text()
            .await
            .map_err(|e| ParseError::FetchError(e.to_string()))?;

        debug!("Fetched {} bytes", content.len());
        Ok(content)
    }

    /// Fetch and parse an OpenAPI spec from a URL
    pub async fn fetch_and_parse(url: &str) -> ParseResult<ParsedSpec> {
        let content = Self::fetch(url).await?;
        Self::parse(&content)
    }

    /// Convert a raw OpenAPI spec to our internal format
    fn convert_spec(raw: RawOpenApiSpec) -> ParseResult<ParsedSpec> {
        if !raw.openapi.starts_with("3.") {
            return Err(ParseError::UnsupportedVersion(raw.openapi));
        }

        debug!("Parsing OpenAPI {} spec: {}", raw.openapi, raw.info.title);

        let operations = OperationExtractor::extract(&raw);
        info!("Found {} endpoints, {} operations", raw.paths.len(), operations.len());

        let servers = raw
            .servers
            .iter()
            .map(|s| ServerInfo {
                url: s.url.clone(),
                description: s.description.clone(),
            })
            .collect();

        Ok(ParsedSpec {
            title: raw.info.title,
            description: raw.info.description,
            version: raw.info.version,
            servers,
            operations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE_SPEC: &str = r#"
openapi: "3.0.0"
info:
  title: BitBadges API
  version: "0.1"
servers:
  - url: https://api.bitbadges.io
paths:
  /status:
    get:
      operationId: getStatus
      summary: Get Status
  /collection/{collectionId}:
    get:
      operationId: getCollection
      summary: Get Collection
      tags: [Badges]
      parameters:
        - name: collectionId
          in: path
          required: true
          schema:
            type: string
  /collections:
    post:
      operationId: getCollectionsBatch
      requestBody:
        required: true
        content:
          application/json:
            schema:
              type: object
              properties:
                collectionsToFetch:
                  type: array
"#;

    #[test]
    fn test_parse_yaml() {
        let spec = OpenApiParser::parse_yaml(SAMPLE_SPEC).unwrap();

        assert_eq!(spec.title, "BitBadges API");
        assert_eq!(spec.version, "0.1");
        assert_eq!(spec.operations.len(), 3);
        assert_eq!(spec.servers[0].url, "https://api.bitbadges.io");
    }

    #[test]
    fn test_parse_detects_json() {
        let json = r#"{"openapi": "3.1.0", "info": {"title": "T", "version": "1"}, "paths": {}}"#;
        let spec = OpenApiParser::parse(json).unwrap();
        assert_eq!(spec.title, "T");
        assert!(spec.operations.is_empty());
    }

    #[test]
    fn test_rejects_swagger_2() {
        let yaml = "openapi: \"2.0\"\ninfo:\n  title: Old\n  version: \"1\"\n";
        assert!(matches!(
            OpenApiParser::parse_yaml(yaml),
            Err(ParseError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_rejects_empty_document() {
        assert!(matches!(
            OpenApiParser::parse_yaml("  \n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_sanitize_large_numbers() {
        let yaml_with_large_nums = r#"
openapi: "3.0.0"
info:
  title: Test API
  version: "1.0.0"
paths: {}
components:
  schemas:
    Amount:
      type: integer
      minimum: -9223372036854776000
      maximum: 18446744073709551615
"#;

        let result = OpenApiParser::parse_yaml(yaml_with_large_nums);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_fetch_and_parse_from_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/openapi/combined_processed.yaml"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SAMPLE_SPEC)
                    .insert_header("content-type", "text/yaml"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/openapi/combined_processed.yaml", server.uri());
        let spec = OpenApiParser::fetch_and_parse(&url).await.unwrap();

        let get_collection = spec
            .operations
            .iter()
            .find(|op| op.operation_id.as_deref() == Some("getCollection"))
            .unwrap();
        assert_eq!(get_collection.method, HttpMethod::Get);
        assert_eq!(get_collection.tags, vec!["Badges".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_reports_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = OpenApiParser::fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, ParseError::FetchError(ref m) if m.contains("404")));
    }
}

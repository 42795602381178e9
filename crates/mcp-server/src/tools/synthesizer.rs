//! Derive MCP tool descriptors from OpenAPI operations

use openapi_parser::{ApiOperation, OperationParameter, ParameterLocation, ParsedSpec, RequestBody};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::catalog::{Catalog, InputSchema, ToolDescriptor, ToolMetadata};
use super::config::configure_tool;

/// Naming and filtering rules for synthesis
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Prepended to every operation id to form the tool name
    pub prefix: String,
    /// Operations whose path contains any of these substrings are skipped
    pub excluded_segments: Vec<String>,
}

impl SynthesisOptions {
    /// Rules for the BitBadges API: `bitbadges_` names, no auth endpoints
    pub fn bitbadges() -> Self {
        Self {
            prefix: "bitbadges_".to_string(),
            excluded_segments: vec!["/auth/".to_string(), "/oauth/".to_string()],
        }
    }
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self::bitbadges()
    }
}

/// Generator for MCP tools from OpenAPI specs
pub struct ToolSynthesizer {
    options: SynthesisOptions,
}

impl ToolSynthesizer {
    pub fn new(options: SynthesisOptions) -> Self {
        Self { options }
    }

    /// Build the full catalog: configure first, then one tool per eligible operation.
    ///
    /// Operations without an id, on excluded paths, or whose name is already
    /// taken are skipped; the first occurrence of a name wins.
    pub fn synthesize(&self, spec: &ParsedSpec) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(configure_tool());

        for operation in &spec.operations {
            let Some(operation_id) = operation.operation_id.as_deref() else {
                debug!("Skipping {} {}: no operationId", operation.method, operation.path);
                continue;
            };

            let name = format!("{}{}", self.options.prefix, operation_id);
            if catalog.contains(&name) {
                debug!("Skipping duplicate tool {}", name);
                continue;
            }
            if self.is_excluded(&operation.path) {
                debug!("Skipping excluded path {}", operation.path);
                continue;
            }

            catalog.insert(self.build_tool(name, operation_id, operation));
        }

        info!("Generated {} MCP tools", catalog.len());
        catalog
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.options
            .excluded_segments
            .iter()
            .any(|segment| path.contains(segment.as_str()))
    }

    fn build_tool(&self, name: String, operation_id: &str, operation: &ApiOperation) -> ToolDescriptor {
        let description = operation
            .summary
            .clone()
            .or_else(|| operation.description.clone())
            .unwrap_or_else(|| format!("Execute {}", operation_id));

        let query_params = operation
            .parameters_in(ParameterLocation::Query)
            .map(|p| p.name.clone())
            .collect();

        ToolDescriptor {
            name,
            description,
            input_schema: self.build_input_schema(operation),
            metadata: Some(ToolMetadata {
                path: operation.path.clone(),
                method: operation.method,
                operation_id: operation_id.to_string(),
                tags: operation.tags.clone(),
                query_params,
            }),
        }
    }

    fn build_input_schema(&self, operation: &ApiOperation) -> InputSchema {
        let mut schema = InputSchema::default();

        for param in &operation.parameters {
            if matches!(param.location, ParameterLocation::Path | ParameterLocation::Query) {
                add_parameter(&mut schema, param);
            }
        }

        if let Some(body) = operation.request_body.as_ref().filter(|b| b.is_json()) {
            merge_body_schema(&mut schema, body);
        }

        schema
    }
}

impl Default for ToolSynthesizer {
    fn default() -> Self {
        Self::new(SynthesisOptions::default())
    }
}

fn add_parameter(schema: &mut InputSchema, param: &OperationParameter) {
    let description = param
        .description
        .clone()
        .unwrap_or_else(|| format!("{} parameter", param.name));

    schema.properties.insert(
        param.name.clone(),
        json!({
            "type": param.schema_type().unwrap_or("string"),
            "description": description,
        }),
    );

    if param.required {
        schema.require(&param.name);
    }
}

/// Splice an object body's properties into the tool input, or wrap an opaque body as `body`
fn merge_body_schema(schema: &mut InputSchema, body: &RequestBody) {
    let Some(body_schema) = &body.schema else {
        return;
    };

    match body_schema.get("properties").and_then(Value::as_object) {
        Some(body_props) => {
            for (key, value) in body_props {
                schema.properties.insert(key.clone(), value.clone());
            }
            let body_required = body_schema.get("required").and_then(Value::as_array);
            for name in body_required.into_iter().flatten().filter_map(Value::as_str) {
                schema.require(name);
            }
        }
        None => {
            schema.properties.insert("body".to_string(), body_schema.clone());
            schema.require("body");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::config::CONFIGURE_TOOL;
    use openapi_parser::{HttpMethod, OpenApiParser};

    const SPEC: &str = r##"
openapi: "3.0.0"
info:
  title: BitBadges API
  version: "0"
paths:
  /collection/{collectionId}/{badgeId}/metadata:
    get:
      operationId: getBadgeMetadata
      summary: Get Badge Metadata
      tags: [Badges]
      parameters:
        - name: collectionId
          in: path
          required: true
          description: Collection ID
          schema:
            type: string
        - name: badgeId
          in: path
          required: true
          schema:
            type: integer
  /user:
    get:
      operationId: getAccount
      description: Look up a single account
      parameters:
        - name: address
          in: query
        - name: username
          in: query
          schema:
            type: string
        - name: x-api-key
          in: header
          required: true
  /users:
    post:
      operationId: getAccounts
      requestBody:
        required: true
        content:
          application/json:
            schema:
              $ref: "#/components/schemas/iGetAccountsPayload"
  /claims/complete/{claimId}/{address}:
    post:
      operationId: completeClaim
      requestBody:
        content:
          application/json:
            schema:
              oneOf:
                - type: object
                - type: string
  /auth/getChallenge:
    post:
      operationId: getSignInChallenge
  /oauth/token:
    post:
      operationId: exchangeSIWBBAuthorizationCode
  /collection/{collectionId}:
    get:
      summary: No id here
    post:
      operationId: getAccount
      summary: Duplicate id
  /status:
    get:
      operationId: getStatus
components:
  schemas:
    iGetAccountsPayload:
      type: object
      properties:
        accountsToFetch:
          type: array
        fetchPrivate:
          type: boolean
      required: [accountsToFetch]
"##;

    fn catalog() -> Catalog {
        let spec = OpenApiParser::parse_yaml(SPEC).unwrap();
        ToolSynthesizer::default().synthesize(&spec)
    }

    #[test]
    fn test_catalog_order_and_filtering() {
        assert_eq!(
            catalog().names(),
            vec![
                CONFIGURE_TOOL,
                "bitbadges_getBadgeMetadata",
                "bitbadges_getAccount",
                "bitbadges_getAccounts",
                "bitbadges_completeClaim",
                "bitbadges_getStatus",
            ]
        );
    }

    #[test]
    fn test_duplicate_operation_id_keeps_first() {
        let catalog = catalog();
        let account = catalog.get("bitbadges_getAccount").unwrap();
        let metadata = account.metadata.as_ref().unwrap();
        assert_eq!(metadata.method, HttpMethod::Get);
        assert_eq!(metadata.path, "/user");
        assert_eq!(account.description, "Look up a single account");
    }

    #[test]
    fn test_parameters_become_properties() {
        let catalog = catalog();
        let tool = catalog.get("bitbadges_getBadgeMetadata").unwrap();
        let props = &tool.input_schema.properties;

        assert_eq!(props["collectionId"], json!({"type": "string", "description": "Collection ID"}));
        assert_eq!(props["badgeId"], json!({"type": "integer", "description": "badgeId parameter"}));
        assert_eq!(tool.input_schema.required, vec!["collectionId", "badgeId"]);
        assert_eq!(tool.description, "Get Badge Metadata");

        let metadata = tool.metadata.as_ref().unwrap();
        assert_eq!(metadata.path, "/collection/{collectionId}/{badgeId}/metadata");
        assert_eq!(metadata.tags, vec!["Badges"]);
    }

    #[test]
    fn test_query_parameters_and_headers() {
        let catalog = catalog();
        let tool = catalog.get("bitbadges_getAccount").unwrap();

        assert_eq!(
            tool.input_schema.properties.keys().collect::<Vec<_>>(),
            vec!["address", "username"]
        );
        assert!(tool.input_schema.required.is_empty());
        assert_eq!(
            tool.metadata.as_ref().unwrap().query_params,
            vec!["address".to_string(), "username".to_string()]
        );
    }

    #[test]
    fn test_object_body_is_spliced() {
        let catalog = catalog();
        let tool = catalog.get("bitbadges_getAccounts").unwrap();

        assert!(tool.input_schema.properties.contains_key("accountsToFetch"));
        assert!(tool.input_schema.properties.contains_key("fetchPrivate"));
        assert!(!tool.input_schema.properties.contains_key("body"));
        assert_eq!(tool.input_schema.required, vec!["accountsToFetch"]);
        assert_eq!(tool.description, "Execute getAccounts");
    }

    #[test]
    fn test_opaque_body_is_wrapped() {
        let catalog = catalog();
        let tool = catalog.get("bitbadges_completeClaim").unwrap();

        assert!(tool.input_schema.properties["body"].get("oneOf").is_some());
        assert_eq!(tool.input_schema.required, vec!["body"]);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let first = catalog().to_json_pretty().unwrap();
        let second = catalog().to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_prefix() {
        let spec = OpenApiParser::parse_yaml(SPEC).unwrap();
        let synthesizer = ToolSynthesizer::new(SynthesisOptions {
            prefix: "bb_".to_string(),
            excluded_segments: vec![],
        });
        let catalog = synthesizer.synthesize(&spec);
        assert!(catalog.contains("bb_getSignInChallenge"));
        assert!(catalog.contains(CONFIGURE_TOOL));
    }

    #[test]
    fn test_required_follows_document() {
        let spec = OpenApiParser::parse_yaml(
            r#"
openapi: "3.0.0"
info:
  title: BitBadges API
  version: "0"
paths:
  /collection/{collectionId}:
    get:
      operationId: getCollection
      parameters:
        - name: collectionId
          in: path
        - name: fetchPrivate
          in: query
          required: true
"#,
        )
        .unwrap();

        let catalog = ToolSynthesizer::default().synthesize(&spec);
        let tool = catalog.get("bitbadges_getCollection").unwrap();
        assert_eq!(tool.input_schema.required, vec!["fetchPrivate"]);
    }
}

//! Operation extraction from OpenAPI specs

use tracing::debug;

use crate::resolver::ComponentResolver;
use crate::types::*;

/// Extracts operations from raw OpenAPI spec structures
pub struct OperationExtractor;

impl OperationExtractor {
    /// Extract all operations from a raw OpenAPI spec.
    ///
    /// Paths keep document order; within a path, methods follow
    /// [`HttpMethod::ALL`]. The result is therefore stable for a given document.
    pub fn extract(spec: &RawOpenApiSpec) -> Vec<ApiOperation> {
        let empty = RawComponents::default();
        let resolver = ComponentResolver::new(spec.components.as_ref().unwrap_or(&empty));

        let mut operations = Vec::new();
        for (path, path_item) in &spec.paths {
            let path_params: Vec<OperationParameter> = path_item
                .parameters
                .iter()
                .filter_map(|p| Self::convert_parameter(p, &resolver))
                .collect();

            for method in HttpMethod::ALL {
                if let Some(op) = path_item.operation(method) {
                    operations.push(Self::extract_operation(path, method, op, &path_params, &resolver));
                }
            }
        }

        operations
    }

    fn extract_operation(
        path: &str,
        method: HttpMethod,
        operation: &RawOperation,
        path_params: &[OperationParameter],
        resolver: &ComponentResolver,
    ) -> ApiOperation {
        if operation.operation_id.is_none() {
            debug!("{} {} has no operationId", method, path);
        }

        // Operation-level parameters override path-level ones of the same name
        let mut parameters = path_params.to_vec();
        for param in &operation.parameters {
            if let Some(p) = Self::convert_parameter(param, resolver) {
                parameters.retain(|existing| existing.name != p.name);
                parameters.push(p);
            }
        }

        let request_body = operation
            .request_body
            .as_ref()
            .and_then(|body| Self::extract_request_body(body, resolver));

        ApiOperation {
            operation_id: operation.operation_id.clone(),
            method,
            path: path.to_string(),
            summary: operation.summary.clone(),
            description: operation.description.clone(),
            tags: operation.tags.clone(),
            deprecated: operation.deprecated,
            parameters,
            request_body,
        }
    }

    fn convert_parameter(param: &RawParameter, resolver: &ComponentResolver) -> Option<OperationParameter> {
        let param = resolver.resolve_parameter(param)?;

        let location = match param.location.as_str() {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            _ => return None,
        };

        Some(OperationParameter {
            name: param.name.clone(),
            location,
            required: param.required,
            description: param.description.clone(),
            schema: param.schema.as_ref().map(|s| resolver.resolve_schema(s)),
        })
    }

    fn extract_request_body(body: &RawRequestBody, resolver: &ComponentResolver) -> Option<RequestBody> {
        let body = resolver.resolve_request_body(body)?;

        // Prefer a JSON content type
        let (content_type, media) = body
            .content
            .iter()
            .find(|(ct, _)| ct.contains("json"))
            .or_else(|| body.content.first())?;

        Some(RequestBody {
            required: body.required,
            content_type: content_type.clone(),
            schema: media.schema.as_ref().map(|s| resolver.resolve_schema(s)),
            description: body.description.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r##"
openapi: "3.0.0"
info:
  title: BitBadges API
  version: "0"
paths:
  /collection/{collectionId}:
    parameters:
      - name: collectionId
        in: path
        description: Path-level description
        schema:
          type: string
    get:
      operationId: getCollection
      parameters:
        - $ref: "#/components/parameters/collectionIdParam"
    post:
      summary: Missing id
  /users:
    post:
      operationId: getAccounts
      requestBody:
        $ref: "#/components/requestBodies/GetAccounts"
components:
  parameters:
    collectionIdParam:
      name: collectionId
      in: path
      required: true
      description: Collection ID
      schema:
        type: string
  requestBodies:
    GetAccounts:
      required: true
      content:
        application/json:
          schema:
            $ref: "#/components/schemas/iGetAccountsPayload"
  schemas:
    iGetAccountsPayload:
      type: object
      properties:
        accountsToFetch:
          type: array
"##;

    fn extract() -> Vec<ApiOperation> {
        let raw: RawOpenApiSpec = serde_yaml::from_str(SPEC).unwrap();
        OperationExtractor::extract(&raw)
    }

    #[test]
    fn test_operation_order_follows_document() {
        let ops = extract();
        let summary: Vec<_> = ops.iter().map(|op| (op.method, op.path.as_str())).collect();
        assert_eq!(
            summary,
            vec![
                (HttpMethod::Get, "/collection/{collectionId}"),
                (HttpMethod::Post, "/collection/{collectionId}"),
                (HttpMethod::Post, "/users"),
            ]
        );
    }

    #[test]
    fn test_missing_operation_id_is_preserved_as_none() {
        let ops = extract();
        assert_eq!(ops[0].operation_id.as_deref(), Some("getCollection"));
        assert!(ops[1].operation_id.is_none());
    }

    #[test]
    fn test_operation_parameter_overrides_path_parameter() {
        let ops = extract();
        let params = &ops[0].parameters;
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].description.as_deref(), Some("Collection ID"));
        assert!(params[0].required);

        // The POST inherits the path-level declaration as written
        assert_eq!(ops[1].parameters[0].description.as_deref(), Some("Path-level description"));
        assert!(!ops[1].parameters[0].required);
    }

    #[test]
    fn test_request_body_ref_is_resolved() {
        let ops = extract();
        let body = ops[2].request_body.as_ref().unwrap();
        assert!(body.required);
        assert!(body.is_json());
        let schema = body.schema.as_ref().unwrap();
        assert_eq!(schema["properties"]["accountsToFetch"]["type"], "array");
    }
}

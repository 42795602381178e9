//! Resolved upstream routes and the path-template helpers shared by the
//! runtime router and generated dispatch code

use openapi_parser::HttpMethod;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::catalog::ToolMetadata;
use crate::error::GatewayError;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("valid regex"))
}

fn version_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/api/v[0-9]+").expect("valid regex"))
}

/// A tool call resolved to an upstream request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    /// Path below the versioned API root, parameters already substituted
    pub endpoint: String,
    /// Argument names forwarded as query string entries
    pub query: Vec<String>,
    /// Whether the argument object is sent as the JSON body
    pub forward_body: bool,
}

impl Route {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            forward_body: method != HttpMethod::Get,
        }
    }

    pub fn with_query(mut self, names: &[&str]) -> Self {
        self.query = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Build a route by interpreting descriptor metadata at call time
    pub fn from_metadata(metadata: &ToolMetadata, args: &Map<String, Value>) -> Result<Self, GatewayError> {
        let endpoint = fill_template(strip_version_prefix(&metadata.path), args)?;
        let mut route = Route::new(metadata.method, endpoint);
        if metadata.method == HttpMethod::Get {
            route.query = metadata.query_params.clone();
        }
        Ok(route)
    }

    /// Query entries for the arguments actually supplied; absent and null values are skipped
    pub fn query_pairs(&self, args: &Map<String, Value>) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter_map(|name| match args.get(name) {
                None | Some(Value::Null) => None,
                Some(value) => Some((name.clone(), scalar_text(value))),
            })
            .collect()
    }
}

/// Placeholder names in a `{param}` path template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_re()
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Drop one leading `/api/v<digits>` segment; the request builder adds its own
pub fn strip_version_prefix(path: &str) -> &str {
    match version_prefix_re().find(path) {
        Some(m) => &path[m.end()..],
        None => path,
    }
}

/// Value of a path parameter, rendered for URL interpolation.
///
/// A missing or null argument is a request construction error: the call is
/// rejected before anything is sent upstream.
pub fn path_arg(args: &Map<String, Value>, name: &str) -> Result<String, GatewayError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(GatewayError::RequestConstruction(format!(
            "missing path parameter '{}'",
            name
        ))),
        Some(value) => Ok(scalar_text(value)),
    }
}

/// Substitute every `{param}` in a template with its argument value
pub fn fill_template(template: &str, args: &Map<String, Value>) -> Result<String, GatewayError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in placeholder_re().captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        out.push_str(&path_arg(args, name.as_str())?);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_strip_version_prefix_once() {
        assert_eq!(strip_version_prefix("/api/v0/collection/{id}"), "/collection/{id}");
        assert_eq!(strip_version_prefix("/api/v12/api/v0/x"), "/api/v0/x");
        assert_eq!(strip_version_prefix("/collection/{id}"), "/collection/{id}");
        assert_eq!(strip_version_prefix("/v0/api/v0"), "/v0/api/v0");
    }

    #[test]
    fn test_fill_template() {
        let filled = fill_template(
            "/collection/{collectionId}/{badgeId}/metadata",
            &args(json!({"collectionId": "7", "badgeId": 3})),
        )
        .unwrap();
        assert_eq!(filled, "/collection/7/3/metadata");
    }

    #[test]
    fn test_missing_path_parameter_fails_fast() {
        let err = fill_template("/collection/{collectionId}", &args(json!({}))).unwrap_err();
        assert!(matches!(err, GatewayError::RequestConstruction(ref m) if m.contains("collectionId")));

        let err = path_arg(&args(json!({"collectionId": null})), "collectionId").unwrap_err();
        assert!(matches!(err, GatewayError::RequestConstruction(_)));
    }

    #[test]
    fn test_get_routes_never_forward_body() {
        assert!(!Route::new(HttpMethod::Get, "/status").forward_body);
        assert!(Route::new(HttpMethod::Post, "/users").forward_body);
        assert!(Route::new(HttpMethod::Delete, "/developerApp").forward_body);
    }

    #[test]
    fn test_query_pairs_skip_absent_values() {
        let route = Route::new(HttpMethod::Get, "/user").with_query(&["address", "username", "fetchPrivate"]);
        let pairs = route.query_pairs(&args(json!({
            "address": "bb1abc",
            "username": null,
            "fetchPrivate": true,
            "unrelated": "x"
        })));
        assert_eq!(
            pairs,
            vec![
                ("address".to_string(), "bb1abc".to_string()),
                ("fetchPrivate".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_metadata_strips_prefix_and_ignores_query_for_post() {
        let metadata = ToolMetadata {
            path: "/api/v0/requestBin/attemptData/{claimId}/{claimAttemptId}".to_string(),
            method: HttpMethod::Post,
            operation_id: "x".to_string(),
            tags: vec![],
            query_params: vec!["q".to_string()],
        };
        let route = Route::from_metadata(&metadata, &args(json!({"claimId": "c", "claimAttemptId": "a"}))).unwrap();
        assert_eq!(route.endpoint, "/requestBin/attemptData/c/a");
        assert!(route.query.is_empty());
        assert!(route.forward_body);
    }
}

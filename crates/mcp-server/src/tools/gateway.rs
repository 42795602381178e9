//! Execute tools by forwarding them to the BitBadges REST API

use openapi_parser::HttpMethod;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::catalog::Catalog;
use super::config::{GatewayConfig, CONFIGURE_TOOL};
use super::route::Route;
use super::router::ToolRouter;
use crate::error::GatewayError;
use crate::protocol::ToolCallResult;

/// Version segment the request builder prepends to every endpoint
pub const API_VERSION: &str = "v0";

/// Header carrying the configured API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Timeout for one upstream call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime tool gateway: one catalog, one configuration slot, one HTTP client
pub struct Gateway {
    router: Box<dyn ToolRouter>,
    config: RwLock<Option<GatewayConfig>>,
    client: Client,
}

impl Gateway {
    /// Create an unconfigured gateway with the default 30 second client
    pub fn new(router: impl ToolRouter + 'static) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GatewayError::from_reqwest)?;
        Ok(Self::with_client(router, client))
    }

    pub fn with_client(router: impl ToolRouter + 'static, client: Client) -> Self {
        Self {
            router: Box::new(router),
            config: RwLock::new(None),
            client,
        }
    }

    /// The full static catalog
    pub fn list(&self) -> &Catalog {
        self.router.catalog()
    }

    pub async fn is_configured(&self) -> bool {
        self.config.read().await.is_some()
    }

    /// Replace the configuration from configure-tool arguments.
    ///
    /// Returns the confirmation text naming the effective base URL.
    pub async fn configure(&self, args: &Value) -> Result<String, GatewayError> {
        let args = args.as_object().ok_or_else(|| {
            GatewayError::InvalidConfiguration("arguments must be an object".to_string())
        })?;
        let config = GatewayConfig::from_args(args)?;
        let message = format!(
            "BitBadges API configured successfully with base URL: {}",
            config.base_url_display()
        );

        info!("Configured BitBadges API at {}", config.base_url_display());
        *self.config.write().await = Some(config);
        Ok(message)
    }

    /// Execute one tool call. Never fails: errors come back as `isError` results.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> ToolCallResult {
        match self.dispatch(name, arguments).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                ToolCallResult::error(format!("Error: {}", e))
            }
        }
    }

    async fn dispatch(&self, name: &str, arguments: Option<Value>) -> Result<String, GatewayError> {
        let args = match arguments {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(GatewayError::RequestConstruction(
                    "arguments must be an object".to_string(),
                ))
            }
        };

        if name == CONFIGURE_TOOL {
            return self.configure(&Value::Object(args)).await;
        }
        if !self.router.catalog().contains(name) {
            return Err(GatewayError::UnknownTool(name.to_string()));
        }

        // Clone out of the lock so a slow upstream call never blocks configure
        let config = self
            .config
            .read()
            .await
            .clone()
            .ok_or(GatewayError::NotConfigured)?;

        let route = self.router.route(name, &args)?;
        self.send(&config, &route, &args).await
    }

    async fn send(
        &self,
        config: &GatewayConfig,
        route: &Route,
        args: &Map<String, Value>,
    ) -> Result<String, GatewayError> {
        let mut url = config
            .base_url()
            .join(&format!("/api/{}{}", API_VERSION, route.endpoint))
            .map_err(|e| GatewayError::RequestConstruction(e.to_string()))?;

        let query = route.query_pairs(args);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query {
                pairs.append_pair(key, value);
            }
        }

        debug!("{} {}", route.method, url);

        let mut request = self
            .client
            .request(reqwest_method(route.method), url)
            .header(API_KEY_HEADER, config.api_key())
            .header(CONTENT_TYPE, "application/json");

        if route.forward_body {
            request = request.json(args);
        }

        let response = request.send().await.map_err(GatewayError::from_reqwest)?;
        let status = response.status();
        let text = response.text().await.map_err(GatewayError::from_reqwest)?;

        if !status.is_success() {
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                message: remote_message(status, &text),
            });
        }

        Ok(match serde_json::from_str::<Value>(&text) {
            Ok(json) => serde_json::to_string_pretty(&json).unwrap_or(text),
            Err(_) => text,
        })
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
        HttpMethod::Options => reqwest::Method::OPTIONS,
        HttpMethod::Trace => reqwest::Method::TRACE,
    }
}

/// Upstream-provided error text, falling back to the status reason phrase
fn remote_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let field = |key: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    field("errorMessage")
        .or_else(|| field("message"))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown status").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::catalog::{InputSchema, ToolDescriptor, ToolMetadata};
    use crate::tools::config::{configure_tool, DEFAULT_BASE_URL};
    use crate::tools::router::{CatalogRouter, GeneratedRouter};
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool(name: &str, method: HttpMethod, path: &str, query: &[&str]) -> ToolDescriptor {
        ToolDescriptor {
            name: name.to_string(),
            description: name.to_string(),
            input_schema: InputSchema::default(),
            metadata: Some(ToolMetadata {
                path: path.to_string(),
                method,
                operation_id: name.to_string(),
                tags: vec![],
                query_params: query.iter().map(|q| q.to_string()).collect(),
            }),
        }
    }

    fn test_gateway() -> Gateway {
        let mut catalog = Catalog::new();
        catalog.insert(configure_tool());
        catalog.insert(tool(
            "bitbadges_getBadgeMetadata",
            HttpMethod::Get,
            "/collection/{collectionId}/{badgeId}/metadata",
            &[],
        ));
        catalog.insert(tool("bitbadges_getAccount", HttpMethod::Get, "/user", &["address", "username"]));
        catalog.insert(tool("bitbadges_getAccounts", HttpMethod::Post, "/api/v0/users", &[]));
        Gateway::new(CatalogRouter::new(catalog)).unwrap()
    }

    async fn configured(server: &MockServer) -> Gateway {
        let gateway = test_gateway();
        gateway
            .configure(&json!({"apiKey": "k1", "baseUrl": server.uri()}))
            .await
            .unwrap();
        gateway
    }

    #[tokio::test]
    async fn test_every_tool_requires_configuration() {
        let gateway = Gateway::new(GeneratedRouter::new().unwrap()).unwrap();
        assert!(!gateway.is_configured().await);

        for name in gateway.list().names().into_iter().skip(1) {
            let result = gateway.call(name, Some(json!({}))).await;
            assert_eq!(result.is_error, Some(true), "{} should fail", name);
            assert_eq!(
                result.first_text(),
                Some("Error: API key not configured. Use bitbadges_configure tool first.")
            );
        }
    }

    #[tokio::test]
    async fn test_configure_reports_base_url() {
        let gateway = test_gateway();

        let result = gateway.call(CONFIGURE_TOOL, Some(json!({"apiKey": "k1"}))).await;
        assert_eq!(result.is_error, None);
        assert_eq!(
            result.first_text().unwrap(),
            format!("BitBadges API configured successfully with base URL: {}", DEFAULT_BASE_URL)
        );

        let text = gateway
            .configure(&json!({"apiKey": "k1", "baseUrl": "https://x.test"}))
            .await
            .unwrap();
        assert_eq!(text, "BitBadges API configured successfully with base URL: https://x.test");

        let result = gateway.call(CONFIGURE_TOOL, Some(json!({"baseUrl": "https://x.test"}))).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result.first_text().unwrap().starts_with("Error: Invalid configuration"));
    }

    #[tokio::test]
    async fn test_path_substitution_and_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/collection/7/3/metadata"))
            .and(header("x-api-key", "k1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Badge 3"})))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = configured(&server).await;
        let result = gateway
            .call(
                "bitbadges_getBadgeMetadata",
                Some(json!({"collectionId": "7", "badgeId": "3"})),
            )
            .await;

        assert_eq!(result.is_error, None);
        assert_eq!(
            result.first_text().unwrap(),
            serde_json::to_string_pretty(&json!({"name": "Badge 3"})).unwrap()
        );
    }

    #[tokio::test]
    async fn test_get_never_sends_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/user"))
            .and(query_param("address", "bb1abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": "bb1abc"})))
            .mount(&server)
            .await;

        let gateway = configured(&server).await;
        let result = gateway
            .call(
                "bitbadges_getAccount",
                Some(json!({"address": "bb1abc", "username": null, "extra": {"big": "payload"}})),
            )
            .await;
        assert_eq!(result.is_error, None);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
        assert_eq!(requests[0].url.query(), Some("address=bb1abc"));
    }

    #[tokio::test]
    async fn test_post_forwards_arguments() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v0/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
            .mount(&server)
            .await;

        let gateway = configured(&server).await;
        let result = gateway
            .call("bitbadges_getAccounts", Some(json!({"accountsToFetch": []})))
            .await;
        assert_eq!(result.first_text(), Some("plain text"));

        let result = gateway.call("bitbadges_getAccounts", None).await;
        assert_eq!(result.is_error, None);

        let requests = server.received_requests().await.unwrap();
        let first: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let second: Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(first, json!({"accountsToFetch": []}));
        assert_eq!(second, json!({}));
    }

    #[tokio::test]
    async fn test_remote_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/collection/9/1/metadata"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"errorMessage": "Collection not found"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v0/user"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = configured(&server).await;
        let result = gateway
            .call("bitbadges_getBadgeMetadata", Some(json!({"collectionId": 9, "badgeId": 1})))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.first_text(), Some("Error: API Error (404): Collection not found"));

        let result = gateway.call("bitbadges_getAccount", None).await;
        assert_eq!(result.first_text(), Some("Error: API Error (500): Internal Server Error"));
    }

    #[tokio::test]
    async fn test_network_error() {
        let gateway = test_gateway();
        gateway
            .configure(&json!({"apiKey": "k1", "baseUrl": "http://127.0.0.1:1"}))
            .await
            .unwrap();

        let result = gateway.call("bitbadges_getAccount", None).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result
            .first_text()
            .unwrap()
            .starts_with("Error: Network Error: No response received from API"));
    }

    #[tokio::test]
    async fn test_unknown_tool_and_missing_path_parameter() {
        let server = MockServer::start().await;
        let gateway = configured(&server).await;

        let result = gateway.call("bitbadges_nope", None).await;
        assert_eq!(result.first_text(), Some("Error: Unknown tool: bitbadges_nope"));

        let result = gateway
            .call("bitbadges_getBadgeMetadata", Some(json!({"collectionId": "7"})))
            .await;
        assert_eq!(
            result.first_text(),
            Some("Error: Request Error: missing path parameter 'badgeId'")
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gateways_are_independent() {
        let first = test_gateway();
        let second = test_gateway();
        first.configure(&json!({"apiKey": "k1"})).await.unwrap();

        assert!(first.is_configured().await);
        assert!(!second.is_configured().await);
    }

    #[test]
    fn test_remote_message_fallbacks() {
        assert_eq!(
            remote_message(StatusCode::BAD_REQUEST, r#"{"message": "bad"}"#),
            "bad"
        );
        assert_eq!(remote_message(StatusCode::BAD_REQUEST, "oops"), "Bad Request");
    }
}

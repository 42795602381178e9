//! Gateway configuration and the hand-written configure tool

use serde_json::{json, Map, Value};
use tracing::warn;
use url::Url;
use zeroize::Zeroizing;

use super::catalog::{InputSchema, ToolDescriptor};
use crate::error::GatewayError;

/// Name of the configure tool
pub const CONFIGURE_TOOL: &str = "bitbadges_configure";

/// Base URL used when configure is called without a usable override
pub const DEFAULT_BASE_URL: &str = "https://api.bitbadges.io";

/// API key and base URL needed before any upstream call
#[derive(Clone)]
pub struct GatewayConfig {
    api_key: Zeroizing<String>,
    base_url: Url,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl GatewayConfig {
    /// Build a configuration from raw values.
    ///
    /// An absent or unparsable base URL falls back to [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GatewayError::InvalidConfiguration("API key is required".to_string()));
        }

        let base_url = match base_url.map(Url::parse) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                warn!("Ignoring invalid base URL ({}), using {}", e, DEFAULT_BASE_URL);
                default_base_url()
            }
            None => default_base_url(),
        };

        Ok(Self {
            api_key: Zeroizing::new(api_key),
            base_url,
        })
    }

    /// Validate configure-tool arguments
    pub fn from_args(args: &Map<String, Value>) -> Result<Self, GatewayError> {
        let api_key = match args.get("apiKey") {
            Some(Value::String(key)) => key.clone(),
            Some(_) => {
                return Err(GatewayError::InvalidConfiguration(
                    "apiKey must be a string".to_string(),
                ))
            }
            None => return Err(GatewayError::InvalidConfiguration("apiKey is required".to_string())),
        };

        let base_url = match args.get("baseUrl") {
            None | Some(Value::Null) => None,
            Some(Value::String(url)) => Some(url.as_str()),
            Some(_) => {
                return Err(GatewayError::InvalidConfiguration(
                    "baseUrl must be a string".to_string(),
                ))
            }
        };

        Self::new(api_key, base_url)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Effective base URL as reported to callers, without the trailing slash `Url` adds
    pub fn base_url_display(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

/// Descriptor for the configure tool, always first in a catalog
pub fn configure_tool() -> ToolDescriptor {
    let mut input_schema = InputSchema::default();
    input_schema.properties.insert(
        "apiKey".to_string(),
        json!({
            "type": "string",
            "description": "Your BitBadges API key from the developer portal"
        }),
    );
    input_schema.properties.insert(
        "baseUrl".to_string(),
        json!({
            "type": "string",
            "description": format!("Base URL for the BitBadges API (optional, defaults to {})", DEFAULT_BASE_URL)
        }),
    );
    input_schema.require("apiKey");

    ToolDescriptor {
        name: CONFIGURE_TOOL.to_string(),
        description: "Configure the BitBadges API key and base URL".to_string(),
        input_schema,
        metadata: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_default_base_url() {
        let config = GatewayConfig::from_args(&args(json!({"apiKey": "k1"}))).unwrap();
        assert_eq!(config.base_url_display(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), "k1");
    }

    #[test]
    fn test_explicit_base_url() {
        let config =
            GatewayConfig::from_args(&args(json!({"apiKey": "k1", "baseUrl": "https://x.test"}))).unwrap();
        assert_eq!(config.base_url_display(), "https://x.test");
    }

    #[test]
    fn test_invalid_base_url_falls_back_to_default() {
        let config =
            GatewayConfig::from_args(&args(json!({"apiKey": "k1", "baseUrl": "not a url"}))).unwrap();
        assert_eq!(config.base_url_display(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_key_is_required() {
        assert!(matches!(
            GatewayConfig::from_args(&args(json!({"baseUrl": "https://x.test"}))),
            Err(GatewayError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GatewayConfig::from_args(&args(json!({"apiKey": ""}))),
            Err(GatewayError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GatewayConfig::from_args(&args(json!({"apiKey": 42}))),
            Err(GatewayError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = GatewayConfig::new("secret-key", None).unwrap();
        assert!(!format!("{:?}", config).contains("secret-key"));
    }

    #[test]
    fn test_configure_tool_shape() {
        let tool = configure_tool();
        assert_eq!(tool.name, CONFIGURE_TOOL);
        assert_eq!(tool.input_schema.required, vec!["apiKey".to_string()]);
        assert!(tool.metadata.is_none());
    }
}

//! Tool name → upstream route resolution

use serde_json::{Map, Value};

use super::catalog::Catalog;
use super::config::CONFIGURE_TOOL;
use super::route::Route;
use crate::error::GatewayError;
use crate::generated;

/// Source of a tool catalog and the routes behind it
pub trait ToolRouter: Send + Sync {
    /// Full catalog served by `tools/list`, configure first
    fn catalog(&self) -> &Catalog;

    /// Resolve a non-configure tool call to its upstream route
    fn route(&self, name: &str, args: &Map<String, Value>) -> Result<Route, GatewayError>;
}

/// Router backed by the compiled-in generated module
pub struct GeneratedRouter {
    catalog: Catalog,
}

impl GeneratedRouter {
    pub fn new() -> serde_json::Result<Self> {
        Ok(Self {
            catalog: Catalog::from_json(generated::CATALOG_JSON)?,
        })
    }
}

impl ToolRouter for GeneratedRouter {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn route(&self, name: &str, args: &Map<String, Value>) -> Result<Route, GatewayError> {
        generated::route(name, args)
    }
}

/// Router that interprets descriptor metadata at call time.
///
/// Used when serving a catalog loaded from disk instead of the generated module.
pub struct CatalogRouter {
    catalog: Catalog,
}

impl CatalogRouter {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl ToolRouter for CatalogRouter {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn route(&self, name: &str, args: &Map<String, Value>) -> Result<Route, GatewayError> {
        let metadata = self
            .catalog
            .get(name)
            .filter(|t| t.name != CONFIGURE_TOOL)
            .and_then(|t| t.metadata.as_ref())
            .ok_or_else(|| GatewayError::UnknownTool(name.to_string()))?;

        Route::from_metadata(metadata, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_parser::HttpMethod;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_generated_catalog_loads() {
        let router = GeneratedRouter::new().unwrap();
        let catalog = router.catalog();

        assert_eq!(catalog.names()[0], CONFIGURE_TOOL);
        assert!(catalog.contains("bitbadges_getStatus"));
        assert!(catalog.contains("bitbadges_getBadgeMetadata"));
        assert!(catalog.iter().skip(1).all(|t| t.metadata.is_some()));
    }

    #[test]
    fn test_generated_routes_agree_with_metadata() {
        let router = GeneratedRouter::new().unwrap();
        let fallback = CatalogRouter::new(router.catalog().clone());

        for tool in router.catalog().iter().skip(1) {
            let metadata = tool.metadata.as_ref().unwrap();
            let mut call = Map::new();
            for param in metadata.path_params() {
                call.insert(param.to_string(), json!("p"));
            }
            assert_eq!(
                router.route(&tool.name, &call).unwrap(),
                fallback.route(&tool.name, &call).unwrap(),
                "route mismatch for {}",
                tool.name
            );
        }
    }

    #[test]
    fn test_generated_badge_metadata_route() {
        let router = GeneratedRouter::new().unwrap();
        let route = router
            .route(
                "bitbadges_getBadgeMetadata",
                &args(json!({"collectionId": "7", "badgeId": "3"})),
            )
            .unwrap();

        assert_eq!(route.method, HttpMethod::Get);
        assert_eq!(route.endpoint, "/collection/7/3/metadata");
        assert!(!route.forward_body);
    }

    #[test]
    fn test_configure_and_unknown_are_not_routed() {
        let generated = GeneratedRouter::new().unwrap();
        let catalog = CatalogRouter::new(generated.catalog().clone());

        for router in [&generated as &dyn ToolRouter, &catalog] {
            assert!(matches!(
                router.route(CONFIGURE_TOOL, &Map::new()),
                Err(GatewayError::UnknownTool(_))
            ));
            assert!(matches!(
                router.route("bitbadges_doesNotExist", &Map::new()),
                Err(GatewayError::UnknownTool(_))
            ));
        }
    }
}

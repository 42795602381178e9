//! Tool descriptors and the ordered catalog served by `tools/list`

use openapi_parser::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::route::placeholders;

/// One callable tool, as advertised to MCP clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
    /// Upstream routing data; absent for hand-written tools such as configure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ToolMetadata>,
}

/// JSON-schema-like description of a tool's arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: Map::new(),
            required: Vec::new(),
        }
    }
}

impl InputSchema {
    /// Mark a property required, keeping first-seen order
    pub fn require(&mut self, name: &str) {
        if !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
    }
}

/// Where and how a tool reaches the upstream API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolMetadata {
    /// Path template as written in the document, `{param}` placeholders included
    pub path: String,
    pub method: HttpMethod,
    pub operation_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Names of the declared query parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_params: Vec<String>,
}

impl ToolMetadata {
    /// Placeholder names in the path template, in order of appearance
    pub fn path_params(&self) -> Vec<&str> {
        placeholders(&self.path)
    }
}

/// Ordered, name-unique set of tools
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tool unless one with the same name is already present.
    ///
    /// Returns `false` when the tool was dropped as a duplicate.
    pub fn insert(&mut self, tool: ToolDescriptor) -> bool {
        if self.contains(&tool.name) {
            return false;
        }
        self.tools.push(tool);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a catalog, dropping later duplicates of an already-seen name
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tools: Vec<ToolDescriptor> = serde_json::from_str(json)?;
        let mut catalog = Catalog::new();
        for tool in tools {
            catalog.insert(tool);
        }
        Ok(catalog)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ToolDescriptor;
    type IntoIter = std::slice::Iter<'a, ToolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool(name: &str) -> ToolDescriptor {
        ToolDescriptor {
            name: name.to_string(),
            description: format!("Execute {}", name),
            input_schema: InputSchema::default(),
            metadata: Some(ToolMetadata {
                path: "/collection/{collectionId}/{badgeId}/metadata".to_string(),
                method: HttpMethod::Get,
                operation_id: name.to_string(),
                tags: vec![],
                query_params: vec![],
            }),
        }
    }

    #[test]
    fn test_insert_keeps_first_of_duplicate_names() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(tool("a")));
        let mut dup = tool("a");
        dup.description = "second".to_string();
        assert!(!catalog.insert(dup));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().description, "Execute a");
    }

    #[test]
    fn test_serialized_shape() {
        let mut catalog = Catalog::new();
        catalog.insert(tool("bitbadges_getBadgeMetadata"));

        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value[0]["inputSchema"]["type"], "object");
        assert_eq!(value[0]["inputSchema"]["required"], json!([]));
        assert_eq!(value[0]["metadata"]["method"], "GET");
        assert_eq!(value[0]["metadata"]["operationId"], "bitbadges_getBadgeMetadata");
        assert!(value[0]["metadata"].get("queryParams").is_none());
    }

    #[test]
    fn test_path_params() {
        let t = tool("x");
        assert_eq!(t.metadata.unwrap().path_params(), vec!["collectionId", "badgeId"]);
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.insert(tool("b"));
        catalog.insert(tool("a"));

        let restored = Catalog::from_json(&catalog.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored.names(), vec!["b", "a"]);
        assert_eq!(restored, catalog);
    }
}

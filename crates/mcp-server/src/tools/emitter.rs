//! Render a catalog into a self-contained Rust dispatch module

use openapi_parser::HttpMethod;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use super::catalog::{Catalog, ToolDescriptor};
use super::config::CONFIGURE_TOOL;
use super::route::{placeholders, strip_version_prefix};
use crate::error::GenerateError;

const HEADER: &str = "\
//! BitBadges tool routes.
//!
//! Generated by `bitbadges-mcp generate` from the BitBadges OpenAPI document.
//! Do not edit by hand; regenerate instead.
";

/// Renders the generated dispatch module
pub struct SourceEmitter;

impl SourceEmitter {
    /// Render the complete module text for a catalog.
    ///
    /// The output depends only on the catalog, so rendering the same catalog
    /// twice yields identical text.
    pub fn render(catalog: &Catalog) -> Result<String, GenerateError> {
        let catalog_json = catalog.to_json_pretty()?;
        let tools: Vec<(&ToolDescriptor, &super::catalog::ToolMetadata)> = catalog
            .iter()
            .filter(|t| t.name != CONFIGURE_TOOL)
            .filter_map(|t| t.metadata.as_ref().map(|m| (t, m)))
            .collect();
        let uses_args = tools
            .iter()
            .any(|(_, m)| !placeholders(strip_version_prefix(&m.path)).is_empty());

        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        if !tools.is_empty() {
            out.push_str("use openapi_parser::HttpMethod;\n");
        }
        out.push_str("use serde_json::{Map, Value};\n\n");
        out.push_str("use crate::error::GatewayError;\n");
        if uses_args {
            out.push_str("use crate::tools::{path_arg, Route};\n\n");
        } else {
            out.push_str("use crate::tools::Route;\n\n");
        }

        let hashes = "#".repeat(raw_string_hashes(&catalog_json));
        out.push_str("/// Serialized tool catalog, configure tool first\n");
        let _ = writeln!(out, "pub const CATALOG_JSON: &str = r{h}\"{json}\"{h};\n", h = hashes, json = catalog_json);

        out.push_str("/// Resolve a generated tool to its upstream route\n");
        if !uses_args {
            out.push_str("#[allow(unused_variables)]\n");
        }
        out.push_str("pub fn route(name: &str, args: &Map<String, Value>) -> Result<Route, GatewayError> {\n");
        out.push_str("    let route = match name {\n");
        for (tool, metadata) in &tools {
            render_arm(&mut out, &tool.name, metadata.method, &metadata.path, &metadata.query_params);
        }
        out.push_str("        _ => return Err(GatewayError::UnknownTool(name.to_string())),\n");
        out.push_str("    };\n");
        out.push_str("    Ok(route)\n");
        out.push_str("}\n");

        Ok(out)
    }

    /// Render and overwrite `path` in full
    pub fn write(catalog: &Catalog, path: &Path) -> Result<(), GenerateError> {
        let source = Self::render(catalog)?;
        std::fs::write(path, source).map_err(|source| GenerateError::Write {
            path: path.display().to_string(),
            source,
        })?;
        info!("Wrote {} tool routes to {}", catalog.len().saturating_sub(1), path.display());
        Ok(())
    }
}

fn render_arm(out: &mut String, name: &str, method: HttpMethod, path: &str, query: &[String]) {
    let endpoint = endpoint_expr(strip_version_prefix(path));

    let _ = writeln!(out, "        {:?} => Route::new(", name);
    let _ = writeln!(out, "            {},", method.variant_path());
    let _ = writeln!(out, "            {},", endpoint);
    if method == HttpMethod::Get && !query.is_empty() {
        let names: Vec<String> = query.iter().map(|q| format!("{:?}", q)).collect();
        let _ = writeln!(out, "        )\n        .with_query(&[{}]),", names.join(", "));
    } else {
        out.push_str("        ),\n");
    }
}

/// Endpoint expression: a plain literal, or `format!` with one `path_arg` per placeholder
fn endpoint_expr(template: &str) -> String {
    let params = placeholders(template);
    if params.is_empty() {
        return format!("{:?}", template);
    }

    // Rewrite `{name}` to `{}` and escape any other braces for format!
    let mut pattern = String::with_capacity(template.len());
    let mut rest = template;
    for param in &params {
        let marker = format!("{{{}}}", param);
        let Some(pos) = rest.find(&marker) else {
            continue;
        };
        pattern.push_str(&escape_braces(&rest[..pos]));
        pattern.push_str("{}");
        rest = &rest[pos + marker.len()..];
    }
    pattern.push_str(&escape_braces(rest));

    let args: Vec<String> = params
        .iter()
        .map(|p| format!("path_arg(args, {:?})?", p))
        .collect();
    format!("format!({:?}, {})", pattern, args.join(", "))
}

fn escape_braces(s: &str) -> String {
    s.replace('{', "{{").replace('}', "}}")
}

/// Number of `#` needed so the raw string cannot be closed early by its content
fn raw_string_hashes(content: &str) -> usize {
    let mut longest = 0;
    for (i, _) in content.match_indices('"') {
        let run = content[i + 1..].chars().take_while(|c| *c == '#').count();
        longest = longest.max(run);
    }
    longest + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::catalog::{InputSchema, ToolMetadata};
    use crate::tools::config::configure_tool;

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

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(configure_tool());
        catalog.insert(tool(
            "bitbadges_getBadgeMetadata",
            HttpMethod::Get,
            "/collection/{collectionId}/{badgeId}/metadata",
            &[],
        ));
        catalog.insert(tool(
            "bitbadges_getCollectionAmountTrackerById",
            HttpMethod::Get,
            "/api/v0/collection/amountTracker",
            &[],
        ));
        catalog.insert(tool("bitbadges_getAccount", HttpMethod::Get, "/user", &["address", "username"]));
        catalog.insert(tool("bitbadges_updateDeveloperApp", HttpMethod::Put, "/developerApp", &["ignored"]));
        catalog
    }

    #[test]
    fn test_endpoint_expr() {
        assert_eq!(endpoint_expr("/status"), r#""/status""#);
        assert_eq!(
            endpoint_expr("/collection/{collectionId}/{badgeId}/metadata"),
            r#"format!("/collection/{}/{}/metadata", path_arg(args, "collectionId")?, path_arg(args, "badgeId")?)"#
        );
    }

    #[test]
    fn test_render_has_one_arm_per_tool_except_configure() {
        let source = SourceEmitter::render(&catalog()).unwrap();

        assert!(source.contains("\"bitbadges_getBadgeMetadata\" => Route::new("));
        assert!(source.contains("\"bitbadges_getAccount\" => Route::new("));
        assert!(!source.contains("\"bitbadges_configure\" =>"));
        assert!(source.contains("_ => return Err(GatewayError::UnknownTool(name.to_string())),"));
        assert!(source.contains("pub const CATALOG_JSON: &str = r#\"["));
    }

    #[test]
    fn test_render_strips_version_prefix() {
        let source = SourceEmitter::render(&catalog()).unwrap();
        assert!(source.contains("            \"/collection/amountTracker\",\n"));
        // The catalog itself keeps the original template
        assert!(source.contains("\"path\": \"/api/v0/collection/amountTracker\""));
    }

    #[test]
    fn test_query_only_for_get_routes() {
        let source = SourceEmitter::render(&catalog()).unwrap();
        assert!(source.contains(".with_query(&[\"address\", \"username\"]),"));
        assert!(!source.contains("\"ignored\"]"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(
            SourceEmitter::render(&catalog()).unwrap(),
            SourceEmitter::render(&catalog()).unwrap()
        );
    }

    #[test]
    fn test_raw_string_hashes() {
        assert_eq!(raw_string_hashes(r#"{"a": 1}"#), 1);
        assert_eq!(raw_string_hashes(r##"{"a": "x"#"}"##), 2);
    }

    #[test]
    fn test_write_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.rs");
        std::fs::write(&path, "stale contents that are much longer than anything else ".repeat(1000)).unwrap();

        let mut only_configure = Catalog::new();
        only_configure.insert(configure_tool());
        SourceEmitter::write(&only_configure, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale contents"));
        assert!(written.contains("#[allow(unused_variables)]"));
        assert!(!written.contains("use openapi_parser::HttpMethod;"));
    }
}

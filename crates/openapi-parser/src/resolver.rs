//! `$ref` resolution against a document's `components` section

use serde_json::{Map, Value};

use crate::types::{RawComponents, RawParameter, RawRequestBody};

const SCHEMA_PREFIX: &str = "#/components/schemas/";
const PARAMETER_PREFIX: &str = "#/components/parameters/";
const REQUEST_BODY_PREFIX: &str = "#/components/requestBodies/";

/// Resolves `$ref` references to schemas, parameters and request bodies.
///
/// Schema references are inlined recursively up to `max_depth` levels, which
/// keeps self-referential schemas finite. A reference that cannot be found is
/// left in place verbatim.
pub struct ComponentResolver<'a> {
    components: &'a RawComponents,
    max_depth: usize,
}

impl<'a> ComponentResolver<'a> {
    pub fn new(components: &'a RawComponents) -> Self {
        Self {
            components,
            max_depth: 10,
        }
    }

    /// Resolve a schema, inlining every `$ref` it (transitively) contains
    pub fn resolve_schema(&self, schema: &Value) -> Value {
        self.resolve_schema_at(schema, 0)
    }

    /// Follow a parameter reference chain to a concrete parameter
    pub fn resolve_parameter<'p>(&self, param: &'p RawParameter) -> Option<&'p RawParameter>
    where
        'a: 'p,
    {
        let mut current = param;
        for _ in 0..=self.max_depth {
            let Some(reference) = current.reference.as_deref() else {
                return Some(current);
            };
            current = reference
                .strip_prefix(PARAMETER_PREFIX)
                .and_then(|name| self.components.parameters.get(name))?;
        }
        None
    }

    /// Follow a request body reference chain to a concrete body
    pub fn resolve_request_body<'b>(&self, body: &'b RawRequestBody) -> Option<&'b RawRequestBody>
    where
        'a: 'b,
    {
        let mut current = body;
        for _ in 0..=self.max_depth {
            let Some(reference) = current.reference.as_deref() else {
                return Some(current);
            };
            current = reference
                .strip_prefix(REQUEST_BODY_PREFIX)
                .and_then(|name| self.components.request_bodies.get(name))?;
        }
        None
    }

    fn resolve_schema_at(&self, schema: &Value, depth: usize) -> Value {
        if depth > self.max_depth {
            return schema.clone();
        }

        let Value::Object(obj) = schema else {
            return schema.clone();
        };

        if let Some(target) = obj
            .get("$ref")
            .and_then(Value::as_str)
            .and_then(|r| r.strip_prefix(SCHEMA_PREFIX))
            .and_then(|name| self.components.schemas.get(name))
        {
            return self.resolve_schema_at(target, depth + 1);
        }

        let mut result = Map::new();
        for (key, value) in obj {
            let resolved = match key.as_str() {
                "properties" => self.resolve_each_value(value, depth),
                "items" | "not" => self.resolve_schema_at(value, depth + 1),
                "additionalProperties" if value.is_object() => {
                    self.resolve_schema_at(value, depth + 1)
                }
                "allOf" | "oneOf" | "anyOf" => self.resolve_each_item(value, depth),
                _ => value.clone(),
            };
            result.insert(key.clone(), resolved);
        }
        Value::Object(result)
    }

    fn resolve_each_value(&self, value: &Value, depth: usize) -> Value {
        match value.as_object() {
            Some(obj) => Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), self.resolve_schema_at(v, depth + 1)))
                    .collect(),
            ),
            None => value.clone(),
        }
    }

    fn resolve_each_item(&self, value: &Value, depth: usize) -> Value {
        match value.as_array() {
            Some(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.resolve_schema_at(item, depth + 1))
                    .collect(),
            ),
            None => value.clone(),
        }
    }
}

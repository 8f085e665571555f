//! # Schema Rendering
//!
//! Renders a schema node tree in the JSON-Schema-like form used for path
//! proposal prompts and the CLI `schema` subcommand.

use geoplot_core::SchemaNode;
use serde_json::{json, Map, Value};

/// Render `schema` as a JSON-Schema-like value:
/// `{"type": "object", "properties": …}`, `{"type": "array", "items": …}`,
/// or `{"type": "<scalar>"}`.
pub fn schema_to_value(schema: &SchemaNode) -> Value {
    match schema {
        SchemaNode::Object(properties) => {
            let rendered: Map<String, Value> = properties
                .iter()
                .map(|(name, node)| (name.clone(), schema_to_value(node)))
                .collect();
            json!({"type": "object", "properties": rendered})
        }
        SchemaNode::Array(items) => {
            json!({"type": "array", "items": schema_to_value(items)})
        }
        SchemaNode::Scalar(kind) => json!({"type": kind.name()}),
    }
}

//! # Schema Inference
//!
//! Builds the structural approximation of a concrete JSON value. Objects
//! keep their full property sets; arrays collapse to a single element
//! shape by unifying the schemas of their elements.
//!
//! Unification rules, applied pairwise left to right:
//! - identical kinds merge recursively (objects union their properties,
//!   arrays merge their element shapes);
//! - `integer` widens to `number` when both appear;
//! - `null` yields to any other kind;
//! - any other conflict keeps the first-seen kind.
//!
//! An empty array gets a `null` element shape.

use geoplot_core::{ScalarKind, SchemaNode};
use serde_json::Value;

/// Infer the structural schema of `document`.
pub fn infer_schema(document: &Value) -> SchemaNode {
    match document {
        Value::Null => SchemaNode::Scalar(ScalarKind::Null),
        Value::Bool(_) => SchemaNode::Scalar(ScalarKind::Boolean),
        Value::Number(n) => {
            if n.is_f64() {
                SchemaNode::Scalar(ScalarKind::Number)
            } else {
                SchemaNode::Scalar(ScalarKind::Integer)
            }
        }
        Value::String(_) => SchemaNode::Scalar(ScalarKind::String),
        Value::Array(items) => {
            let element = items
                .iter()
                .map(infer_schema)
                .reduce(unify)
                .unwrap_or(SchemaNode::Scalar(ScalarKind::Null));
            SchemaNode::array(element)
        }
        Value::Object(properties) => SchemaNode::Object(
            properties
                .iter()
                .map(|(name, value)| (name.clone(), infer_schema(value)))
                .collect(),
        ),
    }
}

fn unify(left: SchemaNode, right: SchemaNode) -> SchemaNode {
    match (left, right) {
        (SchemaNode::Scalar(ScalarKind::Null), other)
        | (other, SchemaNode::Scalar(ScalarKind::Null)) => other,
        (SchemaNode::Object(mut left), SchemaNode::Object(right)) => {
            for (name, node) in right {
                let merged = match left.remove(&name) {
                    Some(existing) => unify(existing, node),
                    None => node,
                };
                left.insert(name, merged);
            }
            SchemaNode::Object(left)
        }
        (SchemaNode::Array(left), SchemaNode::Array(right)) => {
            SchemaNode::array(unify(*left, *right))
        }
        (SchemaNode::Scalar(a), SchemaNode::Scalar(b)) if a == b => SchemaNode::Scalar(a),
        (SchemaNode::Scalar(ScalarKind::Integer), SchemaNode::Scalar(ScalarKind::Number))
        | (SchemaNode::Scalar(ScalarKind::Number), SchemaNode::Scalar(ScalarKind::Integer)) => {
            SchemaNode::Scalar(ScalarKind::Number)
        }
        // Irreconcilable shapes: keep the first observation.
        (first, _) => first,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::schema_to_value;
    use serde_json::json;

    #[test]
    fn infers_a_flat_list_of_coordinates() {
        let document = json!([
            {"latitude": 53.1, "longitude": 10.7},
            {"latitude": 3.3, "longitude": 5.5},
        ]);
        assert_eq!(
            schema_to_value(&infer_schema(&document)),
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "latitude": {"type": "number"},
                        "longitude": {"type": "number"},
                    },
                },
            })
        );
    }

    #[test]
    fn infers_a_buried_list_of_coordinates() {
        let document = json!({
            "points": [
                {"latitude": 53.1, "longitude": 10.7},
                {"latitude": 3.3, "longitude": 5.5},
            ],
            "version": 1,
        });
        assert_eq!(
            schema_to_value(&infer_schema(&document)),
            json!({
                "type": "object",
                "properties": {
                    "points": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "latitude": {"type": "number"},
                                "longitude": {"type": "number"},
                            },
                        },
                    },
                    "version": {"type": "integer"},
                },
            })
        );
    }

    #[test]
    fn infers_a_list_of_buried_coordinates() {
        let document = json!([
            {"point": {"latitude": 53.1, "longitude": 10.7}},
            {"point": {"latitude": 3.3, "longitude": 5.5}},
        ]);
        assert_eq!(
            schema_to_value(&infer_schema(&document)),
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "point": {
                            "type": "object",
                            "properties": {
                                "latitude": {"type": "number"},
                                "longitude": {"type": "number"},
                            },
                        },
                    },
                },
            })
        );
    }

    #[test]
    fn infers_string_encoded_coordinates() {
        let document = json!([
            {"latitude": "53.1", "longitude": "10.7"},
        ]);
        assert_eq!(
            schema_to_value(&infer_schema(&document)),
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "latitude": {"type": "string"},
                        "longitude": {"type": "string"},
                    },
                },
            })
        );
    }

    #[test]
    fn unifies_partial_objects_across_elements() {
        let document = json!([
            {"latitude": 53.1},
            {"longitude": 10.7},
        ]);
        assert_eq!(
            infer_schema(&document),
            SchemaNode::array(SchemaNode::object([
                ("latitude", SchemaNode::Scalar(ScalarKind::Number)),
                ("longitude", SchemaNode::Scalar(ScalarKind::Number)),
            ]))
        );
    }

    #[test]
    fn widens_integer_to_number() {
        let document = json!([1, 2.5]);
        assert_eq!(
            infer_schema(&document),
            SchemaNode::array(SchemaNode::Scalar(ScalarKind::Number))
        );
    }

    #[test]
    fn null_yields_to_other_kinds() {
        let document = json!([null, "x", null]);
        assert_eq!(
            infer_schema(&document),
            SchemaNode::array(SchemaNode::Scalar(ScalarKind::String))
        );
    }

    #[test]
    fn conflicting_kinds_keep_the_first_observation() {
        let document = json!(["x", 1]);
        assert_eq!(
            infer_schema(&document),
            SchemaNode::array(SchemaNode::Scalar(ScalarKind::String))
        );
    }

    #[test]
    fn empty_array_gets_a_null_element_shape() {
        assert_eq!(
            infer_schema(&json!([])),
            SchemaNode::array(SchemaNode::Scalar(ScalarKind::Null))
        );
    }
}

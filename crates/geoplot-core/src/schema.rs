//! # Schema Node Model
//!
//! A recursive description of JSON structural shape — objects with named
//! properties, arrays with a single element shape, and scalar leaves —
//! without concrete values. Schema trees are built once per document (see
//! `geoplot-schema`) and consumed read-only by tracing and validation.

use std::collections::BTreeMap;
use std::fmt;

/// The scalar types a schema leaf can carry.
///
/// Spellings follow JSON Schema (`"number"`, `"integer"`, …) so that
/// rendered schemas and error messages read the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Floating-point number.
    Number,
    /// Whole number.
    Integer,
    /// Text.
    String,
    /// true/false.
    Boolean,
    /// JSON null.
    Null,
}

impl ScalarKind {
    /// The JSON Schema spelling of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural description of the JSON data at one location.
///
/// A node has exactly one kind. Object property order is irrelevant to
/// matching, so properties live in a `BTreeMap` for deterministic
/// iteration and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Keyed mapping: property name → shape of that property's value.
    Object(BTreeMap<String, SchemaNode>),
    /// Ordered list: single shape describing every element.
    Array(Box<SchemaNode>),
    /// Scalar leaf.
    Scalar(ScalarKind),
}

impl SchemaNode {
    /// Build an object node from (name, child) pairs.
    pub fn object<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        Self::Object(
            properties
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    /// Build an array node with the given element shape.
    pub fn array(items: SchemaNode) -> Self {
        Self::Array(Box::new(items))
    }

    /// The JSON Schema spelling of this node's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Scalar(kind) => kind.name(),
        }
    }

    /// The scalar kind if this node is a leaf.
    pub fn as_scalar(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }
}

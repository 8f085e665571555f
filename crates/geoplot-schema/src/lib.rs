//! # geoplot-schema — Structural Schema Inference
//!
//! Approximates the shape of a raw JSON document as a
//! [`SchemaNode`](geoplot_core::SchemaNode) tree — object property sets,
//! array element shapes, scalar kinds — and renders such trees back into
//! JSON-Schema-like form for path proposal prompts and CLI output.
//!
//! The inferred tree is an approximation, not a formal JSON Schema:
//! heterogeneous array elements are unified by the rules in [`infer`],
//! and no validation vocabulary (`required`, bounds, patterns) is
//! produced. That is all the path engine needs.

pub mod infer;
pub mod render;

pub use infer::infer_schema;
pub use render::schema_to_value;

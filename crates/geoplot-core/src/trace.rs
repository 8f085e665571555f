//! # Schema Tracing
//!
//! Matches a [`Path`] against a [`SchemaNode`] tree, finding the longest
//! prefix of the path that is reachable and the node it lands on. Shared
//! by path validation and by callers that want to inspect partial matches
//! directly.

use crate::path::Path;
use crate::schema::SchemaNode;

/// Result of matching a [`Path`] against a [`SchemaNode`].
///
/// If the full path matched, `prefix_len` equals the path's segment count
/// and `terminal` is the node the path points at. Otherwise `terminal` is
/// the node where matching stopped — the one that lacks the next segment.
#[derive(Debug, Clone, Copy)]
pub struct Trace<'a> {
    /// Number of leading path segments that matched.
    pub prefix_len: usize,
    /// The node reached at the end of the matched prefix.
    pub terminal: &'a SchemaNode,
}

impl Trace<'_> {
    /// Whether the whole path matched.
    pub fn is_complete(&self, path: &Path) -> bool {
        self.prefix_len == path.segments().len()
    }
}

/// Trace `path` through `schema` from the root.
///
/// Object nodes consume one segment per step; array nodes are descended
/// through without consuming a segment; a scalar reached before the path
/// is exhausted stops the trace (scalars have no children).
pub fn trace<'a>(schema: &'a SchemaNode, path: &Path) -> Trace<'a> {
    trace_from(schema, path.segments(), 0)
}

fn trace_from<'a>(node: &'a SchemaNode, segments: &[String], index: usize) -> Trace<'a> {
    if index < segments.len() {
        match node {
            SchemaNode::Object(properties) => {
                if let Some(child) = properties.get(&segments[index]) {
                    return trace_from(child, segments, index + 1);
                }
            }
            SchemaNode::Array(items) => return trace_from(items, segments, index),
            SchemaNode::Scalar(_) => {}
        }
    }
    Trace {
        prefix_len: index,
        terminal: node,
    }
}

//! # Value Extraction
//!
//! Recursive descent through a raw JSON document along a property path,
//! collecting every scalar value the path reaches. Arrays fan out
//! (depth-first, in element order) without consuming a path segment,
//! mirroring the tracing rule. Anything that cannot produce a usable
//! scalar — a missing property, a structural mismatch, an unconvertible
//! terminal value — contributes the missing sentinel instead of an error,
//! so sibling extractions over the same document stay positionally
//! aligned as much as the data allows.

use serde_json::Value;

use crate::path::Path;

/// Extract every scalar value reachable at `path` in `document`.
///
/// The output order equals the document's own container iteration order;
/// no reordering or deduplication is performed. `None` is the missing
/// sentinel — an absent key and an unconvertible value are deliberately
/// indistinguishable.
pub fn extract_values(document: &Value, path: &Path) -> Vec<Option<f64>> {
    let mut values = Vec::new();
    descend(document, path.segments(), &mut values);
    values
}

fn descend(value: &Value, remaining: &[String], values: &mut Vec<Option<f64>>) {
    match value {
        // Arrays are transparent: recurse into every element with the
        // same, unadvanced path. Inner arrays expand fully before the
        // next outer element.
        Value::Array(items) => {
            for item in items {
                descend(item, remaining, values);
            }
        }
        Value::Object(properties) => match remaining.split_first() {
            Some((first, rest)) => match properties.get(first) {
                Some(child) => descend(child, rest, values),
                None => values.push(None),
            },
            // Object sitting at the terminal position: not a scalar.
            None => values.push(None),
        },
        scalar => {
            if remaining.is_empty() {
                values.push(coerce(scalar));
            } else {
                // Scalar encountered before the path was exhausted.
                values.push(None);
            }
        }
    }
}

/// Numeric coercion for terminal values: JSON numbers pass through,
/// numeric-looking text parses, everything else is missing.
fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

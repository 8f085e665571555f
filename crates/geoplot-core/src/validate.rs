//! # Path Validation
//!
//! Checks that a candidate property path is fully reachable inside a
//! schema tree and terminates at an allowed scalar kind. Validation
//! failures carry enough context (matched prefix, node kind, missing
//! segment) for a caller — human or LLM — to self-correct and retry.

use thiserror::Error;

use crate::path::Path;
use crate::schema::{ScalarKind, SchemaNode};
use crate::trace::trace;

/// Terminal kinds accepted when the caller does not supply its own set:
/// numeric or textual values.
pub const DEFAULT_ALLOWED_KINDS: &[ScalarKind] = &[
    ScalarKind::Number,
    ScalarKind::Integer,
    ScalarKind::String,
];

/// A candidate path failed validation, or was malformed to begin with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The empty path. Rejected at [`Path`](crate::path::Path) construction.
    #[error("path must contain at least one property name")]
    Empty,

    /// The path walks off the schema: only `prefix` could be matched, and
    /// the node reached there has no property named `missing`.
    #[error(
        "path does not exist in the schema: {terminal_kind} at \"{}\" does not contain a property named \"{missing}\"",
        .prefix.join(".")
    )]
    Unreachable {
        /// The longest leading run of segments that matched.
        prefix: Vec<String>,
        /// Kind of the node where matching stopped.
        terminal_kind: &'static str,
        /// The first segment that could not be matched.
        missing: String,
    },

    /// The path exists but ends on a kind the caller does not accept
    /// (a disallowed scalar, or an object/array).
    #[error(
        "path \"{}\" in the schema has invalid type \"{terminal_kind}\"; expected one of [{}]",
        .path.join("."),
        .allowed.iter().map(|k| k.name()).collect::<Vec<_>>().join(", ")
    )]
    DisallowedTerminal {
        /// The fully matched path.
        path: Vec<String>,
        /// Kind of the node the path points at.
        terminal_kind: &'static str,
        /// The kinds that would have been accepted.
        allowed: Vec<ScalarKind>,
    },
}

/// Validate that `path` is fully reachable in `schema` and terminates at
/// one of the `allowed` scalar kinds.
///
/// Pure function over its inputs; validating an already-valid path always
/// succeeds again. A terminal-kind failure is only reported once the full
/// path has matched — it is never conflated with an unreachable path.
pub fn validate_path(
    schema: &SchemaNode,
    path: &Path,
    allowed: &[ScalarKind],
) -> Result<(), PathError> {
    let traced = trace(schema, path);
    let segments = path.segments();

    if traced.prefix_len < segments.len() {
        return Err(PathError::Unreachable {
            prefix: segments[..traced.prefix_len].to_vec(),
            terminal_kind: traced.terminal.kind_name(),
            missing: segments[traced.prefix_len].clone(),
        });
    }

    match traced.terminal.as_scalar() {
        Some(kind) if allowed.contains(&kind) => Ok(()),
        _ => Err(PathError::DisallowedTerminal {
            path: segments.to_vec(),
            terminal_kind: traced.terminal.kind_name(),
            allowed: allowed.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buried_points_schema() -> SchemaNode {
        SchemaNode::object([
            (
                "points",
                SchemaNode::array(SchemaNode::object([
                    ("latitude", SchemaNode::Scalar(ScalarKind::Number)),
                    ("longitude", SchemaNode::Scalar(ScalarKind::Number)),
                    ("size", SchemaNode::Scalar(ScalarKind::Number)),
                    ("visible", SchemaNode::Scalar(ScalarKind::Boolean)),
                ])),
            ),
            ("version", SchemaNode::Scalar(ScalarKind::Integer)),
        ])
    }

    fn path(s: &str) -> Path {
        s.parse().unwrap()
    }

    #[test]
    fn accepts_a_reachable_numeric_path() {
        let schema = buried_points_schema();
        assert_eq!(
            validate_path(&schema, &path("points.latitude"), DEFAULT_ALLOWED_KINDS),
            Ok(())
        );
    }

    #[test]
    fn integer_counts_as_numeric_by_default() {
        let schema = buried_points_schema();
        assert_eq!(
            validate_path(&schema, &path("version"), DEFAULT_ALLOWED_KINDS),
            Ok(())
        );
    }

    #[test]
    fn unreachable_path_reports_the_matched_prefix() {
        let schema = buried_points_schema();
        let err = validate_path(&schema, &path("points.altitude"), DEFAULT_ALLOWED_KINDS)
            .unwrap_err();
        assert_eq!(
            err,
            PathError::Unreachable {
                prefix: vec!["points".to_string()],
                terminal_kind: "object",
                missing: "altitude".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("object at \"points\""));
        assert!(message.contains("\"altitude\""));
    }

    #[test]
    fn top_level_miss_reports_an_empty_prefix() {
        let schema = buried_points_schema();
        let err = validate_path(&schema, &path("latitude"), DEFAULT_ALLOWED_KINDS).unwrap_err();
        assert_eq!(
            err,
            PathError::Unreachable {
                prefix: Vec::new(),
                terminal_kind: "object",
                missing: "latitude".to_string(),
            }
        );
    }

    #[test]
    fn disallowed_terminal_is_not_reported_as_unreachable() {
        let schema = buried_points_schema();
        let err = validate_path(&schema, &path("points.visible"), DEFAULT_ALLOWED_KINDS)
            .unwrap_err();
        assert!(matches!(
            err,
            PathError::DisallowedTerminal {
                terminal_kind: "boolean",
                ..
            }
        ));
    }

    #[test]
    fn container_terminal_is_disallowed() {
        let schema = buried_points_schema();
        let err =
            validate_path(&schema, &path("points"), DEFAULT_ALLOWED_KINDS).unwrap_err();
        assert!(matches!(
            err,
            PathError::DisallowedTerminal {
                terminal_kind: "array",
                ..
            }
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        let schema = buried_points_schema();
        let p = path("points.longitude");
        assert_eq!(validate_path(&schema, &p, DEFAULT_ALLOWED_KINDS), Ok(()));
        assert_eq!(validate_path(&schema, &p, DEFAULT_ALLOWED_KINDS), Ok(()));
    }

    #[test]
    fn caller_supplied_kinds_override_the_default() {
        let schema = buried_points_schema();
        assert_eq!(
            validate_path(&schema, &path("points.visible"), &[ScalarKind::Boolean]),
            Ok(())
        );
        assert!(
            validate_path(&schema, &path("points.latitude"), &[ScalarKind::Boolean]).is_err()
        );
    }

    mod properties {
        use super::*;
        use crate::trace::trace;
        use proptest::prelude::*;

        fn segment() -> impl Strategy<Value = String> {
            prop::sample::select(vec![
                "points",
                "latitude",
                "longitude",
                "size",
                "visible",
                "version",
                "altitude",
            ])
            .prop_map(String::from)
        }

        proptest! {
            #[test]
            fn prefix_never_exceeds_path_length(
                segments in prop::collection::vec(segment(), 1..6)
            ) {
                let schema = buried_points_schema();
                let p = Path::new(segments.clone()).unwrap();
                prop_assert!(trace(&schema, &p).prefix_len <= segments.len());
            }

            #[test]
            fn unreachable_iff_prefix_is_strictly_shorter(
                segments in prop::collection::vec(segment(), 1..6)
            ) {
                let schema = buried_points_schema();
                let p = Path::new(segments.clone()).unwrap();
                let traced = trace(&schema, &p);
                match validate_path(&schema, &p, DEFAULT_ALLOWED_KINDS) {
                    Err(PathError::Unreachable { prefix, .. }) => {
                        prop_assert!(traced.prefix_len < segments.len());
                        prop_assert_eq!(prefix, segments[..traced.prefix_len].to_vec());
                    }
                    Ok(()) | Err(PathError::DisallowedTerminal { .. }) => {
                        prop_assert_eq!(traced.prefix_len, segments.len());
                    }
                    Err(PathError::Empty) => {
                        prop_assert!(false, "non-empty path reported as empty");
                    }
                }
            }
        }
    }
}

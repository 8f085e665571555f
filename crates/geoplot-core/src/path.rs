//! # Property Paths
//!
//! A [`Path`] is an ordered, non-empty sequence of property names that
//! identifies how to reach a target value: each name steps into an object
//! property, and any intervening array layers are passed through
//! transparently. Paths never encode array indices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validate::PathError;

/// An ordered, non-empty sequence of property names.
///
/// Names are matched literally against object property names. The empty
/// sequence is rejected at construction — the only programmer-error
/// condition in the engine.
///
/// Serializes as a plain JSON array of strings, matching the form the
/// path proposer emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Path(Vec<String>);

impl Path {
    /// Create a path from its segments. Rejects the empty sequence.
    pub fn new(segments: Vec<String>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self(segments))
    }

    /// The property names, in order. Never empty.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for Path {
    type Err = PathError;

    /// Parse the dotted form used by the CLI, e.g. `"points.latitude"`.
    /// Empty segments (doubled or trailing dots) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(
            s.split('.')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

impl TryFrom<Vec<String>> for Path {
    type Error = PathError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl From<Path> for Vec<String> {
    fn from(path: Path) -> Self {
        path.0
    }
}

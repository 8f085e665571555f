//! # geoplot-core — Path Resolution and Value Extraction
//!
//! This crate is the engine of geoplot. It maps candidate property paths
//! against an inferred structural schema of a JSON document, and extracts
//! the scalar values those paths reach in the raw document, producing
//! point geometry suitable for map rendering.
//!
//! ## Key Design Principles
//!
//! 1. **Sum-type dispatch on node kind.** [`SchemaNode`] is a tagged
//!    variant (object/array/scalar) with exhaustive `match` everywhere —
//!    no open-ended type inspection.
//!
//! 2. **Non-empty paths by construction.** [`Path`] is a newtype with a
//!    validated constructor; the empty path is rejected at the boundary so
//!    the traversal code never has to handle it.
//!
//! 3. **Arrays are transparent to paths.** A path element never indexes an
//!    array — tracing and extraction both pass through array layers without
//!    consuming a path element. This is a permanent design constraint: a
//!    path cannot target one specific array element.
//!
//! 4. **Extraction degrades, never raises.** Missing properties and
//!    unconvertible terminal values become the missing sentinel (`None`)
//!    instead of errors, preserving positional alignment across sibling
//!    extractions as much as the data allows.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `geoplot-*` crates (this is the leaf of the DAG).
//! - No I/O; pure, synchronous functions over materialized inputs.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod extract;
pub mod geojson;
pub mod path;
pub mod schema;
pub mod trace;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use extract::extract_values;
pub use geojson::{Feature, FeatureCollection, PointGeometry, STYLE_KEY};
pub use path::Path;
pub use schema::{ScalarKind, SchemaNode};
pub use trace::{trace, Trace};
pub use validate::{validate_path, PathError, DEFAULT_ALLOWED_KINDS};

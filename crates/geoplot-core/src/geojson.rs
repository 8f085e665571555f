//! # GeoJSON Feature Assembly
//!
//! Minimal point-feature types wire-compatible with RFC 7946, plus the
//! glue that turns extracted coordinate pairs and optional styling values
//! into a feature collection. Assembly performs no parsing or alignment
//! validation — inputs correspond positionally.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property key that carries a feature's styling value.
pub const STYLE_KEY: &str = "value";

/// A GeoJSON point geometry. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    /// `[longitude, latitude]`, per RFC 7946.
    pub coordinates: [f64; 2],
}

/// A GeoJSON feature holding one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Zero-based sequential identifier, in input order.
    pub id: u64,
    /// The point geometry.
    pub geometry: PointGeometry,
    /// Attribute map; carries [`STYLE_KEY`] when a styling value exists.
    pub properties: Map<String, Value>,
}

/// A GeoJSON feature collection of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    /// The assembled features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Assemble one feature per `(latitude, longitude)` pair.
    ///
    /// `styles` corresponds to `coordinates` by index. A present style
    /// value lands in the feature's properties under [`STYLE_KEY`]; a
    /// missing one leaves the point without the attribute. With no styles
    /// at all, every properties map is empty. Styles beyond the
    /// coordinate count are ignored.
    pub fn from_points(
        coordinates: Vec<(f64, f64)>,
        styles: Option<Vec<Option<f64>>>,
    ) -> Self {
        let styles = styles.unwrap_or_default();
        let features = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, (latitude, longitude))| {
                let mut properties = Map::new();
                if let Some(Some(style)) = styles.get(index) {
                    properties.insert(STYLE_KEY.to_string(), Value::from(*style));
                }
                Feature {
                    id: index as u64,
                    geometry: PointGeometry {
                        coordinates: [longitude, latitude],
                    },
                    properties,
                }
            })
            .collect();
        Self { features }
    }
}

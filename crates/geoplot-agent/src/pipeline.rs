//! # Plotting Pipeline
//!
//! End-to-end orchestration: fetch the artifact, infer its schema, ask
//! the proposer for property paths, extract the coordinate (and optional
//! style) sequences, and assemble the GeoJSON feature collection.

use serde_json::Value;

use geoplot_core::{extract_values, FeatureCollection};
use geoplot_schema::infer_schema;

use crate::artifact::ArtifactClient;
use crate::error::AgentError;
use crate::proposer::{PathProposer, Proposal, PropertyPaths};

/// Outcome of a plotting run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    /// Extracted point geometry, ready for serialization.
    Features(FeatureCollection),
    /// The proposer declined to map paths; not an error.
    Abstained {
        /// The proposer's reason for declining.
        reason: String,
    },
}

/// Plot a document that is already in memory.
pub async fn plot_document(
    document: &Value,
    proposer: &PathProposer,
) -> Result<PlotOutcome, AgentError> {
    let schema = infer_schema(document);
    match proposer.propose(&schema).await? {
        Proposal::Abstain { reason } => {
            tracing::info!(%reason, "proposer declined to produce property paths");
            Ok(PlotOutcome::Abstained { reason })
        }
        Proposal::Paths(paths) => {
            tracing::info!(
                latitude = %paths.latitude,
                longitude = %paths.longitude,
                style_by = ?paths.style_by,
                "using property paths"
            );
            let collection = assemble(document, &paths);
            tracing::info!(points = collection.features.len(), "assembled point features");
            Ok(PlotOutcome::Features(collection))
        }
    }
}

/// Fetch an artifact from `urls` and plot it.
pub async fn plot_artifact(
    urls: &[String],
    artifacts: &ArtifactClient,
    proposer: &PathProposer,
) -> Result<PlotOutcome, AgentError> {
    let document = artifacts.fetch_json(urls).await?;
    plot_document(&document, proposer).await
}

/// Zip independently extracted sequences into features.
///
/// Latitudes and longitudes pair index-wise (the shorter sequence wins);
/// a pair with a missing coordinate is dropped, and the style sequence is
/// filtered by the same indices so surviving styles stay aligned with
/// their points.
fn assemble(document: &Value, paths: &PropertyPaths) -> FeatureCollection {
    let latitudes = extract_values(document, &paths.latitude);
    let longitudes = extract_values(document, &paths.longitude);
    let styles = paths
        .style_by
        .as_ref()
        .map(|path| extract_values(document, path));

    let mut coordinates = Vec::new();
    let mut kept_styles = styles.as_ref().map(|_| Vec::new());
    for (index, pair) in latitudes.iter().zip(longitudes.iter()).enumerate() {
        let (Some(latitude), Some(longitude)) = pair else {
            continue;
        };
        coordinates.push((*latitude, *longitude));
        if let (Some(kept), Some(all)) = (kept_styles.as_mut(), styles.as_ref()) {
            kept.push(all.get(index).copied().flatten());
        }
    }
    FeatureCollection::from_points(coordinates, kept_styles)
}

//! # geoplot-agent — Network Collaborators and Pipeline
//!
//! The asynchronous half of geoplot: retrieving artifact content over
//! HTTP, asking an OpenAI-compatible model to map schema paths to the
//! latitude/longitude/style roles (with a bounded, validation-driven
//! self-correction loop), and orchestrating the end-to-end plotting
//! pipeline on top of the pure engine in `geoplot-core`.
//!
//! All network activity happens strictly before the core engine runs on
//! the fetched document; the engine itself never suspends.

pub mod artifact;
pub mod error;
pub mod pipeline;
pub mod proposer;

mod retry;

pub use artifact::{ArtifactClient, ArtifactConfig};
pub use error::AgentError;
pub use pipeline::{plot_artifact, plot_document, PlotOutcome};
pub use proposer::{PathProposer, Proposal, ProposerConfig, PropertyPaths};

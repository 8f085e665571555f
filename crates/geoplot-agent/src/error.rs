//! Agent error types.

/// Errors from artifact retrieval, path proposal, and the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// No artifact URL produced usable JSON content.
    #[error("failed to retrieve artifact content: {reason}")]
    ArtifactUnavailable {
        /// Why the last attempt failed.
        reason: String,
    },

    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The API returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {reason}")]
    Deserialization { endpoint: String, reason: String },

    /// A proposed property path failed validation against the schema.
    #[error("invalid property path: {0}")]
    InvalidPath(#[from] geoplot_core::PathError),

    /// The proposer kept producing unusable answers until the retry
    /// budget ran out.
    #[error("path proposal failed after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        /// How many proposal rounds were made.
        attempts: u32,
        /// The rejection that ended the last round.
        last_error: String,
    },
}

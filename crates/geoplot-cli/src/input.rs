//! # Document Input
//!
//! Shared source handling: every subcommand reads its JSON document from
//! either a local file or a URL.

use clap::Args;
use serde_json::Value;

use geoplot_agent::{ArtifactClient, ArtifactConfig};

/// Where to read the JSON document from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Read the document from a local JSON file.
    #[arg(long, conflicts_with = "url", value_name = "FILE")]
    pub input: Option<std::path::PathBuf>,

    /// Fetch the document from a URL.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

impl InputArgs {
    /// Load the document from whichever source was given.
    pub async fn load(&self) -> anyhow::Result<Value> {
        match (&self.input, &self.url) {
            (Some(path), _) => {
                let content = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            (None, Some(url)) => {
                let client = ArtifactClient::new(ArtifactConfig::default())?;
                Ok(client.fetch_json(std::slice::from_ref(url)).await?)
            }
            (None, None) => anyhow::bail!("either --input or --url is required"),
        }
    }
}

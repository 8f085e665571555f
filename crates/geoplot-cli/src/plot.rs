//! # Plot Subcommand
//!
//! Runs the full pipeline on a document and writes the resulting GeoJSON
//! to stdout or a file. Abstention exits non-zero with the proposer's
//! reason.

use clap::Args;

use geoplot_agent::{plot_document, PathProposer, PlotOutcome, ProposerConfig};

use crate::input::InputArgs;

/// Arguments for the plot subcommand.
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write GeoJSON here instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub output: Option<std::path::PathBuf>,

    /// API key for the OpenAI-compatible endpoint.
    /// Falls back to $OPENAI_API_KEY.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Model identifier to use for path proposal.
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,
}

/// Handle `geoplot plot`.
pub async fn run(args: PlotArgs) -> anyhow::Result<()> {
    let api_key = args
        .api_key
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .ok_or_else(|| anyhow::anyhow!("pass --api-key or set OPENAI_API_KEY"))?;

    let mut config = ProposerConfig::new(api_key);
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    let document = args.source.load().await?;
    let proposer = PathProposer::new(config)?;

    match plot_document(&document, &proposer).await? {
        PlotOutcome::Features(collection) => {
            let rendered = serde_json::to_string_pretty(&collection)?;
            match &args.output {
                Some(path) => {
                    std::fs::write(path, rendered)?;
                    tracing::info!(
                        features = collection.features.len(),
                        output = %path.display(),
                        "wrote GeoJSON"
                    );
                }
                None => println!("{rendered}"),
            }
            Ok(())
        }
        PlotOutcome::Abstained { reason } => {
            anyhow::bail!("no map data produced: {reason}")
        }
    }
}

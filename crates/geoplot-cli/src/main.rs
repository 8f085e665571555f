//! # geoplot CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// geoplot — JSON-to-GeoJSON point extraction toolchain.
///
/// Infers the structural schema of a JSON document, maps latitude and
/// longitude property paths with an LLM, extracts the coordinate values,
/// and emits GeoJSON point features.
#[derive(Parser, Debug)]
#[command(name = "geoplot", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Extract point geometry from a JSON document as GeoJSON.
    Plot(geoplot_cli::plot::PlotArgs),
    /// Print the inferred schema of a JSON document.
    Schema(geoplot_cli::schema::SchemaArgs),
    /// Validate candidate property paths against a document's schema.
    Validate(geoplot_cli::validate::ValidateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plot(args) => geoplot_cli::plot::run(args).await,
        Commands::Schema(args) => geoplot_cli::schema::run(args).await,
        Commands::Validate(args) => geoplot_cli::validate::run(args).await,
    }
}

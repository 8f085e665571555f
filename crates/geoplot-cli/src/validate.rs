//! # Validate Subcommand
//!
//! Traces candidate property paths against a document's inferred schema
//! and reports each outcome. Exits non-zero if any path fails.

use clap::Args;

use geoplot_core::{validate_path, Path, DEFAULT_ALLOWED_KINDS};
use geoplot_schema::infer_schema;

use crate::input::InputArgs;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Dotted property path to check, e.g. "points.latitude". Repeatable.
    #[arg(long = "path", value_name = "DOTTED_PATH", required = true)]
    pub paths: Vec<String>,
}

/// Handle `geoplot validate`.
pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let document = args.source.load().await?;
    let schema = infer_schema(&document);

    let mut failures = 0usize;
    for raw in &args.paths {
        let outcome = raw
            .parse::<Path>()
            .and_then(|path| validate_path(&schema, &path, DEFAULT_ALLOWED_KINDS));
        match outcome {
            Ok(()) => println!("ok: {raw}"),
            Err(e) => {
                failures += 1;
                eprintln!("invalid: {e}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} paths failed validation", args.paths.len());
    }
    Ok(())
}

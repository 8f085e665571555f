//! # Schema Subcommand
//!
//! Prints the inferred structural schema of a document in
//! JSON-Schema-like form.

use clap::Args;

use geoplot_schema::{infer_schema, schema_to_value};

use crate::input::InputArgs;

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub source: InputArgs,
}

/// Handle `geoplot schema`.
pub async fn run(args: SchemaArgs) -> anyhow::Result<()> {
    let document = args.source.load().await?;
    let schema = infer_schema(&document);
    println!("{}", serde_json::to_string_pretty(&schema_to_value(&schema))?);
    Ok(())
}

//! Generates `docs/values-reference.md` and `docs/values.md` from the chart's
//! annotated `charts/bunkerweb/values.yaml`.

use std::process::ExitCode;

use clap::Parser;
use helm_values_docs::{cli, config::DocPaths, tracing_config};

#[derive(Parser)]
#[command(name = "generate-docs", version)]
#[command(about = "Generate the BunkerWeb Helm chart values documentation")]
struct Cli {}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let _cli = Cli::parse();
    tracing_config::init()?;

    Ok(cli::run(DocPaths::discover())?)
}

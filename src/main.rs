//! moddoc — render configuration module descriptions as markdown tables.
//!
//! Reads a module description (comment, inputs, outputs) as JSON and prints
//! a markdown document with aligned `## Inputs` / `## Outputs` tables:
//!
//! - **stdin mode**: `moddoc < module.json`
//! - **file mode**: `moddoc module.json`

mod model;
mod render;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "moddoc",
    about = "Generate markdown tables documenting a module's inputs and outputs"
)]
struct Cli {
    /// Module description file (JSON). If omitted, reads from stdin.
    file: Option<PathBuf>,

    /// Sort inputs and outputs by name
    #[arg(long)]
    sort_by_name: bool,

    /// With --sort-by-name, list required inputs first
    #[arg(long)]
    sort_inputs_by_required: bool,

    /// Add a Required column to the inputs table
    #[arg(long)]
    with_required: bool,

    /// Output format: markdown (default)
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let mut doc: model::Document =
        serde_json::from_str(&raw).context("invalid module description")?;

    let settings = settings::Settings {
        sort_by_name: cli.sort_by_name,
        sort_inputs_by_required: cli.sort_inputs_by_required,
        with_required: cli.with_required,
    };

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&mut doc, &settings)?);
    Ok(())
}

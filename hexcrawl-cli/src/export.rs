//! Export command - dump a map data file without a running server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use hexcrawl_server::MapStore;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Args)]
pub struct ExportArgs {
    /// JSON data file backing the map
    #[arg(long, default_value = "hexcrawl-data.json")]
    pub data: PathBuf,

    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let store = MapStore::load(&args.data)
        .with_context(|| format!("failed to load {}", args.data.display()))?;

    match args.format {
        ExportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&store.to_export())?);
        }
        ExportFormat::Csv => {
            println!("{}", store.export_csv(true));
        }
    }

    Ok(())
}

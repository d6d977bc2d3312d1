//! Hexcrawl CLI - Command-line interface
//!
//! Commands:
//! - serve: start the map server
//! - layout: print the computed hex layout
//! - export: dump a map data file without a running server

use clap::{Parser, Subcommand};

mod export;
mod layout;
mod serve;

#[derive(Parser)]
#[command(name = "hexcrawl")]
#[command(about = "Shared hex campaign map for tabletop games")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the map server
    Serve(serve::ServeArgs),
    /// Print the hex layout for a ring count
    Layout(layout::LayoutArgs),
    /// Dump a map data file as JSON or CSV
    Export(export::ExportArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Layout(args) => layout::run(args),
        Commands::Export(args) => export::run(args),
    }
}

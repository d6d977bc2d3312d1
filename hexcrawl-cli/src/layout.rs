//! Layout command - print the computed hex layout

use anyhow::Result;
use clap::{Args, ValueEnum};

use hexcrawl_core::build_layout;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LayoutFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Number of rings around the center hex
    #[arg(long, default_value = "4")]
    pub rings: u32,

    /// Hex radius in pixels
    #[arg(long, default_value = "50")]
    pub size: f64,

    #[arg(long, value_enum, default_value = "table")]
    pub format: LayoutFormat,
}

pub fn run(args: LayoutArgs) -> Result<()> {
    let layout = build_layout(args.rings, args.size)?;

    match args.format {
        LayoutFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        LayoutFormat::Table => {
            println!(
                "{:<8} {:>5} {:>5} {:>5} {:>10} {:>10}",
                "label", "q", "r", "ring", "x", "y"
            );
            for hex in &layout {
                println!(
                    "{:<8} {:>5} {:>5} {:>5} {:>10.2} {:>10.2}",
                    hex.label, hex.q, hex.r, hex.ring, hex.pixel_x, hex.pixel_y
                );
            }
        }
    }

    Ok(())
}

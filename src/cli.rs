//! Command-line interface for the extractor.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;

use crate::config::{validate_input_file, validate_output_target, DEFAULT_OUTPUT_FILE};
use crate::error::Result;
use crate::extractor::extract_locations;
use crate::json::save_json;

/// SVG map extractor - extract named outline paths from an SVG world map.
#[derive(Parser)]
#[command(name = "svgmap-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the map document (SVG, or an HTML page embedding one)
    pub input: PathBuf,

    /// Output JSON file (default: locations.json in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    extract_command(&cli.input, cli.output.as_deref())
}

/// Execute the extraction command.
fn extract_command(input: &Path, output: Option<&Path>) -> Result<()> {
    // Validate both boundaries before doing any work
    validate_input_file(input)?;

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
    validate_output_target(&output_path)?;

    println!(
        "{} {}",
        style("Extracting").bold(),
        style(input.display()).cyan()
    );
    println!();

    let markup = fs::read_to_string(input)?;
    let extraction = extract_locations(&markup)?;

    println!(
        "  Locations: {}",
        style(extraction.locations.len()).green()
    );
    if extraction.skipped > 0 {
        println!(
            "  Skipped: {} (missing identifier or geometry data)",
            extraction.skipped
        );
    }
    if !extraction.warnings.is_empty() {
        println!(
            "  Warnings: {}",
            style(extraction.warnings.len()).yellow().bold()
        );
        for warning in &extraction.warnings {
            println!("    {warning}");
        }
    }

    let saved_path = save_json(&extraction.locations, &output_path)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        saved_path.display()
    );

    Ok(())
}

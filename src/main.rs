//! Remux CLI
//!
//! Merges the best tracks of several media files into one Matroska file
//! using mkvmerge.
//!
//! # Features
//!
//! - HEVC-first video selection, ranked by resolution
//! - One audio track per requested language with a codec preference ladder
//! - Forced and regular subtitles per language, deduplicated
//! - Dry runs printing the exact mkvmerge command
//!
//! # Usage
//!
//! ```bash
//! remux -v --output output.mkv --languages eng,spa input1.mkv input2.mkv
//! remux --dry-run --format json -o output.mkv input1.mkv input2.mkv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use remux_cli::adapters::init_logging;
use remux_cli::cli::{commands, Cli};
use remux_cli::config_initialization::initialize_configuration_hierarchy;

/// Main entry point for the remux CLI application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let settings = initialize_configuration_hierarchy(&cli)?;

    // Initialize logging
    init_logging(&settings.log_level, settings.log_format, cli.remux.verbose)?;

    info!("Starting remux CLI");
    commands::remux(&cli.remux, &settings).await?;

    Ok(())
}

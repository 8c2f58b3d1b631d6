//! CLI module for remux
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::{RemuxArgs, ReportFormat};

/// Remux the best tracks of several media files into one Matroska file
///
/// Picks the best video track, one audio track per requested language and
/// the matching subtitles, then hands them to mkvmerge.
#[derive(Parser, Debug)]
#[command(name = "remux")]
#[command(about = "Merge the best video, audio and subtitle tracks of several files")]
#[command(version)]
#[command(
    after_help = "Example:\n  remux -v --output output.mkv --languages eng,spa input1.mkv input2.mkv input3.mkv"
)]
pub struct Cli {
    /// Configuration file (default: remux.toml or config/remux.toml)
    #[arg(short, long, env = "REMUX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub remux: RemuxArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "remux", "-v", "--output", "out.mkv", "--languages", "eng,spa", "--dry-run",
            "--format", "json", "a.mkv", "b.mkv", "c.mkv",
        ])
        .unwrap();

        assert_eq!(cli.remux.output, PathBuf::from("out.mkv"));
        assert_eq!(
            cli.remux.languages,
            Some(vec!["eng".to_string(), "spa".to_string()])
        );
        assert!(cli.remux.verbose);
        assert!(cli.remux.dry_run);
        assert_eq!(cli.remux.format, ReportFormat::Json);
        assert_eq!(cli.remux.inputs.len(), 3);
        assert!(cli.remux.report_plan());
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(Cli::try_parse_from(["remux", "a.mkv", "b.mkv"]).is_err());
    }

    #[test]
    fn test_single_input_is_rejected() {
        assert!(Cli::try_parse_from(["remux", "-o", "out.mkv", "a.mkv"]).is_err());
    }
}

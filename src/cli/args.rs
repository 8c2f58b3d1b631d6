//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Plan report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for a remux run
#[derive(Args, Debug)]
pub struct RemuxArgs {
    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Comma-separated languages, in preference order (e.g. eng,spa)
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Print the selected tracks and log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Select tracks and print the remuxer command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Plan report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Ignore the tracks of files the remuxer cannot handle
    #[arg(long)]
    pub skip_unsupported: bool,

    /// Remuxer binary (default: mkvmerge)
    #[arg(long)]
    pub remuxer: Option<String>,

    /// Input media files, at least two
    #[arg(required = true, num_args = 2..)]
    pub inputs: Vec<PathBuf>,
}

impl RemuxArgs {
    /// Whether the plan report goes to stdout
    pub fn report_plan(&self) -> bool {
        self.verbose || self.dry_run
    }
}

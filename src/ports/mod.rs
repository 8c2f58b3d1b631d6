// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for inspecting one container file
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe a file and return its track inventory and container metadata
    ///
    /// A failed invocation or an undecodable payload is a `ProbeFail`.
    async fn probe(&self, file_path: &Path) -> Result<ProbeReport, DomainError>;
}

/// Track inventory and container metadata of a probed file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeReport {
    pub duration: Duration,
    pub size: u64,
    pub supported: bool,
    pub tracks: Vec<Track>,
}

impl ProbeReport {
    /// Attach the report to its input path and list position
    pub fn into_input(self, path: impl Into<PathBuf>, position: usize) -> Input {
        Input {
            path: path.into(),
            position,
            duration: self.duration,
            size: self.size,
            supported: self.supported,
            tracks: self.tracks,
        }
    }
}

/// Port for running the external remuxer
#[async_trait]
pub trait RemuxPort: Send + Sync {
    /// Run the remuxer to completion with the given arguments
    ///
    /// A non-zero exit is a `RemuxFail` carrying the captured output.
    async fn remux(&self, args: &[String]) -> Result<RemuxReport, DomainError>;
}

/// Outcome of a successful remux run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemuxReport {
    /// Captured stdout followed by captured stderr, not interleaved
    pub output: String,
}

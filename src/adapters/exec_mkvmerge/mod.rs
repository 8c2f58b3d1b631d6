//! mkvmerge execution adapter
//!
//! Runs the remuxer once, blocking until it exits. There is no timeout,
//! retry or cancellation.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::domain::errors::*;
use crate::ports::*;

/// mkvmerge-based execution adapter
pub struct MkvmergeExecAdapter {
    program: String,
}

impl MkvmergeExecAdapter {
    /// Create new execution adapter running the given mkvmerge binary
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl RemuxPort for MkvmergeExecAdapter {
    async fn remux(&self, args: &[String]) -> Result<RemuxReport, DomainError> {
        debug!("Running {} with {} arguments", self.program, args.len());

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|e| DomainError::RemuxFail {
                status: "not started".to_string(),
                output: format!("failed to run {}: {}", self.program, e),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            error!("{} exited with {}", self.program, output.status);
            return Err(DomainError::RemuxFail {
                status: output.status.to_string(),
                output: combined,
            });
        }

        info!("{} finished successfully", self.program);
        Ok(RemuxReport { output: combined })
    }
}

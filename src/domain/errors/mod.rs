// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
///
/// Every variant is terminal: nothing in the pipeline retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Probe invocation failed or returned an undecodable payload
    #[error("Failed to probe {path}: {message}")]
    ProbeFail { path: String, message: String },

    /// A required track category has nothing to choose from
    #[error("Track selection failed: {0}")]
    SelectionFail(String),

    /// The remuxer exited unsuccessfully
    #[error("Remux failed ({status}):\n{output}")]
    RemuxFail { status: String, output: String },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    ConfigFail(String),

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),
}

impl DomainError {
    /// Build a probe failure for the given input path
    pub fn probe(path: impl std::fmt::Display, message: impl Into<String>) -> Self {
        DomainError::ProbeFail {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;

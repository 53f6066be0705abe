use std::time::Duration;

use thiserror::Error;

use crate::extraction::ExtractionKind;

/// Boxed error returned by color-analysis collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ChromaError>;

// Main Library Error Type

#[derive(Error, Debug)]
pub enum ChromaError {
    #[error("{kind} extraction failed: {source}")]
    Collaborator {
        kind: ExtractionKind,
        #[source]
        source: BoxError,
    },
    #[error("{kind} extraction timed out after {after:?}")]
    Timeout {
        kind: ExtractionKind,
        after: Duration,
    },
    #[error("No {0} collaborator was provided")]
    MissingCollaborator(ExtractionKind),
    #[error("A tokio runtime is required to run extractions: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
    #[error("Configuration Error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("Failed to install the tracing subscriber: {0}")]
    Telemetry(String),
}

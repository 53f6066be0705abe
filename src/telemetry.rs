use tracing::Level;

use crate::config::Configuration;
use crate::error::{ChromaError, Result};

/// Installs a global fmt subscriber. Fails if one is already installed.
pub fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|e| ChromaError::Telemetry(e.to_string()))
}

pub fn init_logging_from(configuration: &Configuration) -> Result<()> {
    init_logging(configuration.max_level()?)
}

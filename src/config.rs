use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

use crate::error::{ChromaError, Result};

/// Prefix for environment overrides, e.g. `CHROMA_REQUEST_TIMEOUT_MS=500`.
pub const ENV_PREFIX: &str = "CHROMA";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    /// Deadline for a single collaborator call. Unset means requests may run forever.
    pub request_timeout_ms: Option<u64>,
    pub track_status: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_timeout_ms: None,
            track_status: true,
        }
    }
}

impl Configuration {
    /// Loads the configuration from an optional file, then applies `CHROMA_*` overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        let configuration = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(configuration)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    pub fn max_level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| ChromaError::InvalidLogLevel(self.log_level.clone()))
    }
}

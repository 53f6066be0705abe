pub mod collaborator;
pub mod orchestrator;
pub mod request;
pub mod service;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorValue;

pub use collaborator::{
    AverageColorSource, ColorOptions, Collaborators, PaletteSource, ProminentColorSource,
};
pub use orchestrator::ExtractionOrchestrator;
pub use request::{RequestHandle, RequestOutcome};
pub use service::{CollaboratorService, ExtractionRequest, RawExtraction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionKind {
    Prominent,
    Average,
    Palette,
}

impl ExtractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionKind::Prominent => "prominent",
            ExtractionKind::Average => "average",
            ExtractionKind::Palette => "palette",
        }
    }
}

impl fmt::Display for ExtractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized extraction, ready to be merged into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Prominent(ColorValue),
    Average(ColorValue),
    Palette(Vec<ColorValue>),
}

impl ExtractionResult {
    pub fn kind(&self) -> ExtractionKind {
        match self {
            ExtractionResult::Prominent(_) => ExtractionKind::Prominent,
            ExtractionResult::Average(_) => ExtractionKind::Average,
            ExtractionResult::Palette(_) => ExtractionKind::Palette,
        }
    }
}

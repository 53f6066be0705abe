use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::ColorValue;
use crate::extraction::{ExtractionKind, ExtractionResult};

/// Latest known colors, one field per extraction kind.
///
/// Each field only reflects the last successful extraction of its own kind. The fields are
/// unrelated to each other and may come from different images and encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromaState {
    pub average: ColorValue,
    pub prominent: ColorValue,
    pub palette: Vec<ColorValue>,
}

impl ChromaState {
    /// Replaces the field matching the result's kind and leaves the others untouched.
    pub fn apply(&mut self, result: ExtractionResult) {
        match result {
            ExtractionResult::Prominent(color) => self.prominent = color,
            ExtractionResult::Average(color) => self.average = color,
            ExtractionResult::Palette(palette) => self.palette = palette,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStatus {
    pub in_flight: usize,
    pub last_error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl KindStatus {
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }
}

/// Request bookkeeping per kind, kept next to [`ChromaState`] without touching it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromaStatus {
    pub prominent: KindStatus,
    pub average: KindStatus,
    pub palette: KindStatus,
}

impl ChromaStatus {
    pub fn kind(&self, kind: ExtractionKind) -> &KindStatus {
        match kind {
            ExtractionKind::Prominent => &self.prominent,
            ExtractionKind::Average => &self.average,
            ExtractionKind::Palette => &self.palette,
        }
    }

    pub fn kind_mut(&mut self, kind: ExtractionKind) -> &mut KindStatus {
        match kind {
            ExtractionKind::Prominent => &mut self.prominent,
            ExtractionKind::Average => &mut self.average,
            ExtractionKind::Palette => &mut self.palette,
        }
    }
}

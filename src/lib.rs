//! Prominent color, average color and palette extraction behind one stateful handle.
//!
//! The pixel analysis itself is done by pluggable collaborators; this crate dispatches the
//! requests, normalizes the results into hex or rgb, and keeps the latest value of each kind.

pub mod color;
pub mod config;
pub mod error;
pub mod extraction;
pub mod extractor;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use color::{ColorEncoding, ColorValue, ImageSource, Swatch};
pub use config::Configuration;
pub use error::{BoxError, ChromaError, Result};
pub use extraction::{
    AverageColorSource, ColorOptions, ExtractionKind, PaletteSource, ProminentColorSource,
    RequestHandle, RequestOutcome,
};
pub use extractor::{ChromaExtractor, ChromaExtractorBuilder};
pub use state::{ChromaState, ChromaStatus, KindStatus};

use std::sync::Arc;

use async_trait::async_trait;

use crate::color::{ColorEncoding, ColorValue, ImageSource, Swatch};
use crate::error::BoxError;

/// Options handed to the single-color collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOptions {
    pub count: usize,
    pub encoding: ColorEncoding,
}

impl ColorOptions {
    /// Exactly one color in the given encoding.
    pub fn single(encoding: ColorEncoding) -> Self {
        Self { count: 1, encoding }
    }
}

/// Finds the most visually dominant color of an image.
#[async_trait]
pub trait ProminentColorSource: Send + Sync {
    async fn prominent(
        &self,
        image: &ImageSource,
        options: ColorOptions,
    ) -> Result<ColorValue, BoxError>;
}

/// Computes the mean color of an image.
#[async_trait]
pub trait AverageColorSource: Send + Sync {
    async fn average(
        &self,
        image: &ImageSource,
        options: ColorOptions,
    ) -> Result<ColorValue, BoxError>;
}

/// Quantizes an image into a palette. Has no notion of output encoding.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    async fn palette(&self, image: &ImageSource) -> Result<Vec<Swatch>, BoxError>;
}

/// The three collaborators a [`ChromaExtractor`](crate::ChromaExtractor) dispatches to.
#[derive(Clone)]
pub struct Collaborators {
    pub prominent: Arc<dyn ProminentColorSource>,
    pub average: Arc<dyn AverageColorSource>,
    pub palette: Arc<dyn PaletteSource>,
}

//! Mock collaborators and tracing helpers shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::color::{ColorValue, ImageSource, Swatch};
use crate::error::BoxError;
use crate::extraction::{
    AverageColorSource, ColorOptions, Collaborators, PaletteSource, ProminentColorSource,
};

pub fn collaborators(
    prominent: Arc<dyn ProminentColorSource>,
    average: Arc<dyn AverageColorSource>,
    palette: Arc<dyn PaletteSource>,
) -> Collaborators {
    Collaborators {
        prominent,
        average,
        palette,
    }
}

/// Always answers with the same color, encoded as requested.
pub struct FixedColor {
    rgb: (u8, u8, u8),
    calls: AtomicUsize,
}

impl FixedColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: (red, green, blue),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, options: ColorOptions) -> ColorValue {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (r, g, b) = self.rgb;
        ColorValue::from_channels(r, g, b, options.encoding)
    }
}

#[async_trait]
impl ProminentColorSource for FixedColor {
    async fn prominent(
        &self,
        _image: &ImageSource,
        options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        Ok(self.answer(options))
    }
}

#[async_trait]
impl AverageColorSource for FixedColor {
    async fn average(
        &self,
        _image: &ImageSource,
        options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        Ok(self.answer(options))
    }
}

pub struct FixedPalette {
    swatches: Vec<Swatch>,
}

impl FixedPalette {
    pub fn new(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }
}

#[async_trait]
impl PaletteSource for FixedPalette {
    async fn palette(&self, _image: &ImageSource) -> Result<Vec<Swatch>, BoxError> {
        Ok(self.swatches.clone())
    }
}

pub struct FailingSource {
    message: &'static str,
}

impl FailingSource {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[async_trait]
impl ProminentColorSource for FailingSource {
    async fn prominent(
        &self,
        _image: &ImageSource,
        _options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        Err(self.message.into())
    }
}

#[async_trait]
impl AverageColorSource for FailingSource {
    async fn average(
        &self,
        _image: &ImageSource,
        _options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        Err(self.message.into())
    }
}

#[async_trait]
impl PaletteSource for FailingSource {
    async fn palette(&self, _image: &ImageSource) -> Result<Vec<Swatch>, BoxError> {
        Err(self.message.into())
    }
}

/// Panics while the extraction is being awaited.
pub struct PanickingSource {
    message: &'static str,
}

impl PanickingSource {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[async_trait]
impl ProminentColorSource for PanickingSource {
    async fn prominent(
        &self,
        _image: &ImageSource,
        _options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        panic!("{}", self.message)
    }
}

/// Holds every call until the test releases the gate registered for that image url.
#[derive(Default)]
pub struct GatedSource {
    gates: Mutex<HashMap<String, oneshot::Receiver<ColorValue>>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self, url: &str) -> oneshot::Sender<ColorValue> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }

    async fn wait(&self, image: &ImageSource) -> Result<ColorValue, BoxError> {
        let ImageSource::Url(url) = image else {
            return Err("gated source only accepts urls".into());
        };
        let gate = self.gates.lock().unwrap().remove(url);
        match gate {
            Some(rx) => Ok(rx.await?),
            None => Err(format!("no gate registered for {url}").into()),
        }
    }
}

#[async_trait]
impl ProminentColorSource for GatedSource {
    async fn prominent(
        &self,
        image: &ImageSource,
        _options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        self.wait(image).await
    }
}

#[async_trait]
impl AverageColorSource for GatedSource {
    async fn average(
        &self,
        image: &ImageSource,
        _options: ColorOptions,
    ) -> Result<ColorValue, BoxError> {
        self.wait(image).await
    }
}

/// Counts `WARN` and `ERROR` events emitted under its dispatcher.
///
/// Extraction tasks inherit the dispatcher that was current when the request was issued, so
/// events from the spawned task are counted too.
#[derive(Clone, Default)]
pub struct EventCounter {
    warnings: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        } else if level == Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }
}

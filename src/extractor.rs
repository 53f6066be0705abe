use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::color::ImageSource;
use crate::config::Configuration;
use crate::error::{ChromaError, Result};
use crate::extraction::{
    AverageColorSource, Collaborators, ExtractionKind, ExtractionOrchestrator, PaletteSource,
    ProminentColorSource, RequestHandle,
};
use crate::state::{ChromaState, ChromaStatus, ResultStore};

/// Public entry point: the current colors plus one request function per extraction kind.
///
/// Cloning is cheap and every clone shares the same state, so handing a clone to a reactive
/// consumer never changes which state its requests write to.
#[derive(Clone)]
pub struct ChromaExtractor {
    orchestrator: Arc<ExtractionOrchestrator>,
}

impl ChromaExtractor {
    pub fn builder(configuration: Configuration) -> ChromaExtractorBuilder {
        ChromaExtractorBuilder::new(configuration)
    }

    /// Snapshot of the latest colors.
    pub fn state(&self) -> ChromaState {
        self.orchestrator.store().snapshot()
    }

    pub fn status(&self) -> ChromaStatus {
        self.orchestrator.store().status()
    }

    pub fn subscribe(&self) -> watch::Receiver<ChromaState> {
        self.orchestrator.store().subscribe()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<ChromaStatus> {
        self.orchestrator.store().subscribe_status()
    }

    /// Stream yielding the current state, then every state after a change.
    pub fn changes(&self) -> WatchStream<ChromaState> {
        WatchStream::new(self.subscribe())
    }

    pub fn request_prominent(
        &self,
        image: impl Into<ImageSource>,
        encoding: Option<&str>,
    ) -> RequestHandle {
        self.request(ExtractionKind::Prominent, image, encoding)
    }

    pub fn request_average(
        &self,
        image: impl Into<ImageSource>,
        encoding: Option<&str>,
    ) -> RequestHandle {
        self.request(ExtractionKind::Average, image, encoding)
    }

    pub fn request_palette(
        &self,
        image: impl Into<ImageSource>,
        encoding: Option<&str>,
    ) -> RequestHandle {
        self.request(ExtractionKind::Palette, image, encoding)
    }

    pub fn request(
        &self,
        kind: ExtractionKind,
        image: impl Into<ImageSource>,
        encoding: Option<&str>,
    ) -> RequestHandle {
        self.orchestrator.request(kind, image.into(), encoding)
    }
}

pub struct ChromaExtractorBuilder {
    configuration: Configuration,
    prominent: Option<Arc<dyn ProminentColorSource>>,
    average: Option<Arc<dyn AverageColorSource>>,
    palette: Option<Arc<dyn PaletteSource>>,
    request_timeout: Option<Duration>,
    runtime: Option<Handle>,
}

impl ChromaExtractorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            prominent: None,
            average: None,
            palette: None,
            request_timeout: None,
            runtime: None,
        }
    }

    pub fn prominent(mut self, source: Arc<dyn ProminentColorSource>) -> Self {
        self.prominent = Some(source);
        self
    }

    pub fn average(mut self, source: Arc<dyn AverageColorSource>) -> Self {
        self.average = Some(source);
        self
    }

    pub fn palette(mut self, source: Arc<dyn PaletteSource>) -> Self {
        self.palette = Some(source);
        self
    }

    // Overrides the configured deadline, at full precision.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn track_status(mut self, track_status: bool) -> Self {
        self.configuration.track_status = track_status;
        self
    }

    // Runtime to spawn requests on. Defaults to the runtime `build` is called from.
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn build(self) -> Result<ChromaExtractor> {
        let collaborators = Collaborators {
            prominent: self
                .prominent
                .ok_or(ChromaError::MissingCollaborator(ExtractionKind::Prominent))?,
            average: self
                .average
                .ok_or(ChromaError::MissingCollaborator(ExtractionKind::Average))?,
            palette: self
                .palette
                .ok_or(ChromaError::MissingCollaborator(ExtractionKind::Palette))?,
        };
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current()?,
        };

        let store = Arc::new(ResultStore::new(self.configuration.track_status));
        let orchestrator = ExtractionOrchestrator::new(
            collaborators,
            store,
            runtime,
            self.request_timeout.or_else(|| self.configuration.request_timeout()),
        );

        Ok(ChromaExtractor {
            orchestrator: Arc::new(orchestrator),
        })
    }
}

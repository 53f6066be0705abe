use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::BoxFuture;
use tower::Service;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::util::BoxCloneSyncService;
use tracing::debug;

use super::{Collaborators, ColorOptions, ExtractionKind, ExtractionResult};
use crate::color::{ColorEncoding, ColorValue, ImageSource, Swatch, normalize};
use crate::error::BoxError;

/// A validated request for one extraction kind.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub kind: ExtractionKind,
    pub image: ImageSource,
    pub encoding: ColorEncoding,
}

/// What a collaborator returned, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawExtraction {
    Prominent(ColorValue),
    Average(ColorValue),
    Palette(Vec<Swatch>),
}

impl RawExtraction {
    /// Only the palette needs normalizing. The single-color collaborators already honor the
    /// requested encoding.
    pub fn normalize(self, encoding: ColorEncoding) -> ExtractionResult {
        match self {
            RawExtraction::Prominent(color) => ExtractionResult::Prominent(color),
            RawExtraction::Average(color) => ExtractionResult::Average(color),
            RawExtraction::Palette(swatches) => {
                ExtractionResult::Palette(normalize(&swatches, encoding))
            }
        }
    }
}

pub type BoxExtractionService = BoxCloneSyncService<ExtractionRequest, RawExtraction, BoxError>;

/// Dispatches an [`ExtractionRequest`] to the collaborator for its kind.
#[derive(Clone)]
pub struct CollaboratorService {
    collaborators: Collaborators,
}

impl CollaboratorService {
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    /// Wraps the service with an optional deadline. Without one, calls are unbounded.
    pub fn into_boxed(self, timeout: Option<Duration>) -> BoxExtractionService {
        let service = ServiceBuilder::new()
            .option_layer(timeout.map(TimeoutLayer::new))
            .service(self);
        BoxCloneSyncService::new(service)
    }
}

impl Service<ExtractionRequest> for CollaboratorService {
    type Response = RawExtraction;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: ExtractionRequest) -> Self::Future {
        let collaborators = self.collaborators.clone();

        Box::pin(async move {
            debug!(
                "Dispatching {} extraction for {} as {}",
                request.kind, request.image, request.encoding
            );
            let options = ColorOptions::single(request.encoding);
            let raw = match request.kind {
                ExtractionKind::Prominent => RawExtraction::Prominent(
                    collaborators
                        .prominent
                        .prominent(&request.image, options)
                        .await?,
                ),
                ExtractionKind::Average => RawExtraction::Average(
                    collaborators.average.average(&request.image, options).await?,
                ),
                ExtractionKind::Palette => {
                    RawExtraction::Palette(collaborators.palette.palette(&request.image).await?)
                }
            };
            Ok(raw)
        })
    }
}

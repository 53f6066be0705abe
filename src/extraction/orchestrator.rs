use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use tower::timeout::error::Elapsed;
use tracing::instrument::WithSubscriber;
use tracing::{Instrument, error, field, info, info_span};
use uuid::Uuid;

use super::service::BoxExtractionService;
use super::{
    Collaborators, CollaboratorService, ExtractionKind, ExtractionRequest, RequestHandle,
    RequestOutcome,
};
use crate::color::{ColorEncoding, ImageSource};
use crate::error::{BoxError, ChromaError};
use crate::state::ResultStore;

/// Turns façade calls into independent background extractions and merges their results.
///
/// Every call spawns its own task. Nothing is deduplicated or coalesced, and when two
/// requests of the same kind overlap, whichever finishes last wins.
pub struct ExtractionOrchestrator {
    service: BoxExtractionService,
    store: Arc<ResultStore>,
    runtime: Handle,
    timeout: Option<Duration>,
}

impl ExtractionOrchestrator {
    pub fn new(
        collaborators: Collaborators,
        store: Arc<ResultStore>,
        runtime: Handle,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            service: CollaboratorService::new(collaborators).into_boxed(timeout),
            store,
            runtime,
            timeout,
        }
    }

    pub fn store(&self) -> &Arc<ResultStore> {
        &self.store
    }

    /// Starts an extraction and returns without waiting for it.
    ///
    /// Unsupported encodings are corrected to hex with a warning. Failures, including a
    /// panicking collaborator, are logged and leave the state as it was. The task runs under
    /// the caller's current tracing subscriber.
    pub fn request(
        &self,
        kind: ExtractionKind,
        image: ImageSource,
        encoding: Option<&str>,
    ) -> RequestHandle {
        let id = Uuid::new_v4();
        let span = info_span!(
            "extraction",
            request_id = %id,
            kind = %kind,
            corrected = field::Empty
        );
        let resolved = span.in_scope(|| ColorEncoding::resolve(encoding));
        span.record("corrected", resolved.corrected);

        let request = ExtractionRequest {
            kind,
            image,
            encoding: resolved.encoding,
        };
        let cancel_token = CancellationToken::new();

        self.store.begin(kind);
        let task = self.runtime.spawn(
            Self::run(
                self.service.clone(),
                self.store.clone(),
                request,
                cancel_token.clone(),
                self.timeout,
            )
            .instrument(span)
            .with_current_subscriber(),
        );

        RequestHandle::new(id, kind, task, cancel_token)
    }

    async fn run(
        service: BoxExtractionService,
        store: Arc<ResultStore>,
        request: ExtractionRequest,
        cancel_token: CancellationToken,
        timeout: Option<Duration>,
    ) -> RequestOutcome {
        let kind = request.kind;
        let encoding = request.encoding;

        let response = tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                info!("{} extraction cancelled", kind);
                store.cancel(kind);
                return RequestOutcome::Cancelled;
            }
            response = AssertUnwindSafe(service.oneshot(request)).catch_unwind() => {
                response.unwrap_or_else(|panic| Err(Self::panic_error(panic)))
            }
        };

        match response {
            Ok(raw) => {
                let result = raw.normalize(encoding);
                info!("{} extraction completed: {:?}", kind, result);
                store.merge(result);
                RequestOutcome::Updated
            }
            Err(source) => {
                let e = Self::classify(kind, source, timeout);
                error!("{}", e);
                let message = e.to_string();
                store.fail(kind, message.clone());
                RequestOutcome::Failed(message)
            }
        }
    }

    fn classify(
        kind: ExtractionKind,
        source: BoxError,
        timeout: Option<Duration>,
    ) -> ChromaError {
        match timeout {
            Some(after) if source.is::<Elapsed>() => ChromaError::Timeout { kind, after },
            _ => ChromaError::Collaborator { kind, source },
        }
    }

    fn panic_error(panic: Box<dyn Any + Send>) -> BoxError {
        let message = panic
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        format!("collaborator panicked: {message}").into()
    }
}

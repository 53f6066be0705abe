use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::ExtractionKind;

/// How a single request ended. Purely informational, the state is already updated (or not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Updated,
    Failed(String),
    Cancelled,
}

/// Handle to an in-flight extraction.
///
/// Dropping it does not stop the request; it keeps running and still merges its result.
#[derive(Debug)]
pub struct RequestHandle {
    id: Uuid,
    kind: ExtractionKind,
    task: JoinHandle<RequestOutcome>,
    cancel_token: CancellationToken,
}

impl RequestHandle {
    pub(crate) fn new(
        id: Uuid,
        kind: ExtractionKind,
        task: JoinHandle<RequestOutcome>,
        cancel_token: CancellationToken,
    ) -> Self {
        Self {
            id,
            kind,
            task,
            cancel_token,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ExtractionKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the request before it merges anything. No effect once it has completed.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// Waits for the request to finish.
    pub async fn outcome(self) -> RequestOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => RequestOutcome::Failed(e.to_string()),
        }
    }
}

use chrono::Utc;
use tokio::sync::watch;

use super::{ChromaState, ChromaStatus};
use crate::extraction::{ExtractionKind, ExtractionResult};

/// Owns the shared [`ChromaState`]. Consumers only ever see snapshots or watch receivers.
#[derive(Debug)]
pub struct ResultStore {
    state: watch::Sender<ChromaState>,
    status: watch::Sender<ChromaStatus>,
    track_status: bool,
}

impl ResultStore {
    pub fn new(track_status: bool) -> Self {
        let (state, _) = watch::channel(ChromaState::default());
        let (status, _) = watch::channel(ChromaStatus::default());
        Self {
            state,
            status,
            track_status,
        }
    }

    pub fn snapshot(&self) -> ChromaState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> ChromaStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ChromaState> {
        self.state.subscribe()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<ChromaStatus> {
        self.status.subscribe()
    }

    /// Atomically replaces the one field the result belongs to.
    pub fn merge(&self, result: ExtractionResult) {
        let kind = result.kind();
        self.state.send_modify(|state| state.apply(result));
        self.update_status(kind, |status| {
            status.in_flight = status.in_flight.saturating_sub(1);
            status.last_error = None;
            status.last_updated = Some(Utc::now());
        });
    }

    pub fn begin(&self, kind: ExtractionKind) {
        self.update_status(kind, |status| status.in_flight += 1);
    }

    pub fn fail(&self, kind: ExtractionKind, error: String) {
        self.update_status(kind, |status| {
            status.in_flight = status.in_flight.saturating_sub(1);
            status.last_error = Some(error);
        });
    }

    pub fn cancel(&self, kind: ExtractionKind) {
        self.update_status(kind, |status| {
            status.in_flight = status.in_flight.saturating_sub(1);
        });
    }

    fn update_status(&self, kind: ExtractionKind, update: impl FnOnce(&mut super::KindStatus)) {
        if !self.track_status {
            return;
        }
        self.status
            .send_modify(|status| update(status.kind_mut(kind)));
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new(true)
    }
}

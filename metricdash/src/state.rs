//! Observable dashboard state: latest snapshot, error banner and loading flag.

use thiserror::Error;

use crate::client::FetchError;
use crate::types::Snapshot;

/// User-visible errors. Messages are fixed; causes are never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DashError {
    #[error("API key not found")]
    MissingCredential,
    #[error("Failed to fetch metrics")]
    FetchFailed,
}

/// What a fetch cycle reports back to the UI loop.
#[derive(Debug)]
pub enum PollEvent {
    /// Credential absent; no request was issued.
    MissingCredential,
    /// A request is about to be sent.
    Started,
    Finished(Result<Snapshot, FetchError>),
}

#[derive(Debug, Default)]
pub struct DashState {
    snapshot: Option<Snapshot>,
    // false once a later fetch failed; snapshot is then only kept for display
    fresh: bool,
    error: Option<DashError>,
    loading: bool,
}

impl DashState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies events in arrival order; the last response to resolve wins.
    pub fn apply(&mut self, ev: PollEvent) {
        match ev {
            PollEvent::MissingCredential => {
                self.error = Some(DashError::MissingCredential);
            }
            PollEvent::Started => {
                self.loading = true;
                self.error = None;
            }
            PollEvent::Finished(Ok(s)) => {
                self.snapshot = Some(s);
                self.fresh = true;
                self.loading = false;
            }
            PollEvent::Finished(Err(_)) => {
                self.fresh = false;
                self.error = Some(DashError::FetchFailed);
                self.loading = false;
            }
        }
    }

    /// Snapshot from the most recent completed fetch, unset if that fetch failed.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref().filter(|_| self.fresh)
    }

    /// Most recently known snapshot, possibly stale.
    pub fn displayed(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_stale(&self) -> bool {
        self.snapshot.is_some() && !self.fresh
    }

    pub fn error(&self) -> Option<DashError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

//! Timer-driven fetch loop with a cancellation handle.
//!
//! Every tick spawns one fetch cycle. Cycles are not serialized: a slow
//! response can still be outstanding when the next one starts, and results
//! are reported in the order they resolve.

use std::time::Duration;

use tokio::{
    sync::mpsc::{self, UnboundedSender},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, warn};

use crate::client::MetricsClient;
use crate::state::{DashState, PollEvent};

/// Owns the timer task. Cancelling (or dropping) stops future cycles only;
/// requests already in flight run to completion.
pub struct PollerHandle {
    timer: JoinHandle<()>,
}

impl PollerHandle {
    pub fn cancel(&self) {
        self.timer.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

/// Runs one cycle immediately, then one per `interval`, until cancelled or
/// the receiving side of `tx` is gone.
pub fn spawn(client: MetricsClient, interval: Duration, tx: UnboundedSender<PollEvent>) -> PollerHandle {
    let timer = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tx.is_closed() {
                debug!("poll receiver dropped; stopping timer");
                break;
            }
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move { fetch_cycle(&client, &tx).await });
        }
    });
    PollerHandle { timer }
}

/// One fetch: credential check, request, result. Send failures mean the UI is gone.
pub async fn fetch_cycle(client: &MetricsClient, tx: &UnboundedSender<PollEvent>) {
    if !client.has_credential() {
        let _ = tx.send(PollEvent::MissingCredential);
        return;
    }
    let _ = tx.send(PollEvent::Started);
    let res = client.fetch_snapshot().await;
    match &res {
        Ok(s) => debug!(host = %s.hostname, id = s.id, "snapshot received"),
        Err(e) => warn!(url = %client.url(), error = %e, "metrics fetch failed"),
    }
    let _ = tx.send(PollEvent::Finished(res));
}

/// Runs a single cycle to completion and returns the resulting state.
pub async fn fetch_once(client: &MetricsClient) -> DashState {
    let (tx, mut rx) = mpsc::unbounded_channel();
    fetch_cycle(client, &tx).await;
    drop(tx);
    let mut st = DashState::new();
    while let Some(ev) = rx.recv().await {
        st.apply(ev);
    }
    st
}

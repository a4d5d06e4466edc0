//! Scroll capture signals sent from the sticky sequencer to the orchestrator.

use serde::Serialize;
use tokio::sync::mpsc;

/// Request to pin or release the page scroll
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "kebab-case")]
pub enum ScrollSignal {
    /// Block page scrolling and pin it at `bottom`
    DisableScroll { bottom: f64 },
    /// Hand scrolling back to the page
    EnableScroll,
}

/// Producer side, owned by the sequencer
#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: mpsc::UnboundedSender<ScrollSignal>,
}

impl SignalSender {
    pub fn emit(&self, signal: ScrollSignal) {
        if self.tx.send(signal).is_err() {
            tracing::warn!("Scroll signal {:?} dropped: no receiver", signal);
        }
    }
}

/// Consumer side, owned by the orchestrator
#[derive(Debug)]
pub struct SignalReceiver {
    rx: mpsc::UnboundedReceiver<ScrollSignal>,
}

impl SignalReceiver {
    /// Take the next pending signal without waiting
    pub fn poll(&mut self) -> Option<ScrollSignal> {
        self.rx.try_recv().ok()
    }
}

/// Create a connected sender/receiver pair
pub fn channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SignalSender { tx }, SignalReceiver { rx })
}

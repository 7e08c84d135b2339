//! Deferred computer moves.
//!
//! The computer's move is applied after a short pause so the player can
//! see the board change. The pause runs as a tokio task that reports back
//! over a channel; the search itself stays on the UI task.

use derive_new::new;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Signal that the computer's pause has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ComputerTurnDue {
    generation: u64,
}

impl ComputerTurnDue {
    /// The schedule this signal belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Schedules at most one pending computer move at a time.
///
/// Every `schedule` or `cancel` advances the generation, so a signal
/// that was already sent for an older schedule is rejected by
/// [`accept`](Self::accept).
#[derive(Debug)]
pub struct ComputerTurnScheduler {
    delay: Duration,
    sender: mpsc::UnboundedSender<ComputerTurnDue>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl ComputerTurnScheduler {
    /// Creates a scheduler that reports on `sender` after `delay`.
    pub fn new(delay: Duration, sender: mpsc::UnboundedSender<ComputerTurnDue>) -> Self {
        Self {
            delay,
            sender,
            generation: 0,
            pending: None,
        }
    }

    /// Starts the pause for a computer move, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self) {
        self.cancel();

        let generation = self.generation;
        let delay = self.delay;
        let sender = self.sender.clone();

        debug!(generation, "Scheduling computer move");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(ComputerTurnDue::new(generation)).is_err() {
                debug!(generation, "Receiver dropped before computer move was due");
            }
        }));
    }

    /// Cancels the pending computer move, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!(generation = self.generation, "Cancelling pending computer move");
            handle.abort();
        }
        self.generation += 1;
    }

    /// Returns true if `due` belongs to the current schedule.
    ///
    /// Accepting clears the pending move, so each schedule is accepted once.
    #[instrument(skip(self))]
    pub fn accept(&mut self, due: &ComputerTurnDue) -> bool {
        if due.generation != self.generation || self.pending.is_none() {
            debug!(current = self.generation, "Ignoring stale computer move signal");
            return false;
        }
        self.pending = None;
        true
    }

    /// True between `schedule` and the matching `accept` or `cancel`.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for ComputerTurnScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

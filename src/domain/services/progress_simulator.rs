//! Progress simulator service
//!
//! Plays the fixed analysis sequence with a pause after every step. No work
//! is done between steps; the sequence only ends early when cancelled.

use crate::domain::entities::{ANALYSIS_STEPS, ProgressStep};
use std::time::Duration;
use tokio::sync::watch;

/// Default pause after each step
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(800);

/// Sending half of a cancellation pair
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Receiving half of a cancellation pair
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled; pends forever if the handle was dropped first
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
        if !fired {
            std::future::pending::<()>().await;
        }
    }
}

/// Creates a linked cancel handle and signal
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// How a simulation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    Completed,
    /// Stopped early; carries the last step that was reported, if any
    Cancelled { last: Option<ProgressStep> },
}

/// Emits the staged analysis steps on a timer
#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    steps: &'static [ProgressStep],
    step_delay: Duration,
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELAY)
    }
}

impl ProgressSimulator {
    pub fn new(step_delay: Duration) -> Self {
        Self {
            steps: &ANALYSIS_STEPS,
            step_delay,
        }
    }

    pub fn steps(&self) -> &'static [ProgressStep] {
        self.steps
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Total time a full run takes
    pub fn total_duration(&self) -> Duration {
        self.step_delay * self.steps.len() as u32
    }

    /// Runs the sequence, calling `on_step` for each stage
    ///
    /// The first step is reported immediately; every step, the last one
    /// included, is followed by the step delay.
    pub async fn run<F>(&self, cancel: &CancelSignal, mut on_step: F) -> SimulationOutcome
    where
        F: FnMut(ProgressStep),
    {
        let mut last = None;

        for step in self.steps {
            if cancel.is_cancelled() {
                return SimulationOutcome::Cancelled { last };
            }

            on_step(*step);
            last = Some(*step);

            tokio::select! {
                _ = tokio::time::sleep(self.step_delay) => {}
                _ = cancel.cancelled() => return SimulationOutcome::Cancelled { last },
            }
        }

        SimulationOutcome::Completed
    }
}

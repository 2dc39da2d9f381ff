//! AutoSavePipeline - debounced background persistence of one module.
//!
//! Every observed change restarts a quiet-period timer. When the timer fires,
//! one detached persist call carries the latest observed submission, so a
//! burst of edits produces exactly one save holding the final state.
//!
//! ## Indicator
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Idle` | nothing pending |
//! | `Saving` | a change is waiting for the quiet period to end |
//! | `Saved` | the last persist call returned, for `saved_display` |
//!
//! A failed persist is logged and dropped. The indicator still shows `Saved`.
//!
//! Persist calls of one pipeline never overlap. Each carries a generation
//! number, and a background save that is overtaken by a newer one (a flush on
//! submit) is skipped instead of overwriting it.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::dashboard::Submission;
use crate::ports::SubmissionGateway;

/// Timing of the autosave pipeline.
#[derive(Debug, Clone)]
pub struct AutoSaveConfig {
    /// Inactivity required before a change is persisted.
    pub quiet_period: Duration,

    /// How long `Saved` stays visible before returning to `Idle`.
    pub saved_display: Duration,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            quiet_period: Duration::from_millis(2000),
            saved_display: Duration::from_millis(2000),
        }
    }
}

impl AutoSaveConfig {
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn with_saved_display(mut self, saved_display: Duration) -> Self {
        self.saved_display = saved_display;
        self
    }
}

/// Save status shown next to the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveIndicator {
    #[default]
    Idle,
    Saving,
    Saved,
}

/// Debounced persistence for one module of one user.
pub struct AutoSavePipeline {
    gateway: Arc<dyn SubmissionGateway>,
    config: AutoSaveConfig,
    indicator: Arc<watch::Sender<SaveIndicator>>,
    last_observed: Option<String>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
    delivered: Arc<Mutex<u64>>,
}

impl AutoSavePipeline {
    pub fn new(gateway: Arc<dyn SubmissionGateway>, config: AutoSaveConfig) -> Self {
        let (indicator, _) = watch::channel(SaveIndicator::Idle);
        Self {
            gateway,
            config,
            indicator: Arc::new(indicator),
            last_observed: None,
            pending: None,
            generation: 0,
            delivered: Arc::new(Mutex::new(0)),
        }
    }

    pub fn indicator(&self) -> SaveIndicator {
        *self.indicator.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveIndicator> {
        self.indicator.subscribe()
    }

    /// True while a quiet-period timer is running.
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Records the current answers as already persisted, without saving.
    pub fn prime(&mut self, submission: &Submission) {
        self.last_observed = fingerprint(submission);
    }

    /// Schedules a save if the answers differ from the last observation.
    ///
    /// Returns whether a save was scheduled.
    pub fn observe(&mut self, submission: Submission) -> bool {
        let current = fingerprint(&submission);
        if current.is_some() && current == self.last_observed {
            return false;
        }
        self.last_observed = current;

        self.abort_pending();
        self.indicator.send_replace(SaveIndicator::Saving);

        let generation = self.next_generation();
        let delivered = Arc::clone(&self.delivered);
        let gateway = Arc::clone(&self.gateway);
        let indicator = Arc::clone(&self.indicator);
        let quiet_period = self.config.quiet_period;
        let saved_display = self.config.saved_display;

        self.pending = Some(tokio::spawn(async move {
            time::sleep(quiet_period).await;
            // Detached so cancelling the timer never interrupts a save in flight.
            tokio::spawn(async move {
                let landed =
                    deliver_in_order(&delivered, generation, gateway.as_ref(), &submission).await;
                if landed {
                    show_saved(indicator, saved_display);
                }
            });
        }));
        true
    }

    /// Cancels any pending timer and persists `submission` right away.
    pub async fn flush(&mut self, submission: Submission) {
        self.abort_pending();
        self.last_observed = fingerprint(&submission);
        self.indicator.send_replace(SaveIndicator::Saving);

        let generation = self.next_generation();
        deliver_in_order(&self.delivered, generation, self.gateway.as_ref(), &submission).await;
        show_saved(Arc::clone(&self.indicator), self.config.saved_display);
    }

    /// Drops a pending save without persisting it.
    pub fn cancel(&mut self) {
        if self.abort_pending() {
            self.indicator.send_if_modified(|state| {
                if *state == SaveIndicator::Saving {
                    *state = SaveIndicator::Idle;
                    true
                } else {
                    false
                }
            });
        }
    }

    /// Cancels and forgets the last observation.
    pub fn reset(&mut self) {
        self.cancel();
        self.last_observed = None;
        self.indicator.send_replace(SaveIndicator::Idle);
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn abort_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for AutoSavePipeline {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

fn fingerprint(submission: &Submission) -> Option<String> {
    serde_json::to_string(&submission.answers).ok()
}

/// Persists `submission` unless a newer generation already landed.
async fn deliver_in_order(
    delivered: &Mutex<u64>,
    generation: u64,
    gateway: &dyn SubmissionGateway,
    submission: &Submission,
) -> bool {
    let mut last = delivered.lock().await;
    if generation <= *last {
        tracing::debug!(
            module = %submission.module,
            generation,
            "Skipping save overtaken by a newer one"
        );
        return false;
    }
    deliver(gateway, submission).await;
    *last = generation;
    true
}

async fn deliver(gateway: &dyn SubmissionGateway, submission: &Submission) {
    match gateway.submit(submission).await {
        Ok(()) => tracing::debug!(
            module = %submission.module,
            email = %submission.identity.email(),
            "Submission persisted"
        ),
        Err(e) => tracing::warn!(
            module = %submission.module,
            email = %submission.identity.email(),
            error = %e,
            "Failed to persist submission"
        ),
    }
}

fn show_saved(indicator: Arc<watch::Sender<SaveIndicator>>, display: Duration) {
    indicator.send_replace(SaveIndicator::Saved);
    tokio::spawn(async move {
        time::sleep(display).await;
        indicator.send_if_modified(|state| {
            if *state == SaveIndicator::Saved {
                *state = SaveIndicator::Idle;
                true
            } else {
                false
            }
        });
    });
}

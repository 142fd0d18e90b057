//! Debounced URL validator
//!
//! Each edit replaces the pending timer. When a timer survives the quiet
//! period, the check it carries is sent to the backend on a detached task.
//! Edits bump a generation counter held inside the watch slot, so a
//! response is applied only while no newer edit has happened.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::state::{ValidationSnapshot, ValidationState};
use crate::client::ProfileBackend;

/// Configuration for the validator
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Quiet period between the last edit and the remote check
    pub debounce: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
        }
    }
}

/// URL field with debounced remote validation
///
/// Must be used from within a tokio runtime.
pub struct UrlValidator {
    backend: Arc<dyn ProfileBackend>,
    config: ValidatorConfig,
    slot: Arc<watch::Sender<ValidationSnapshot>>,
    pending: Option<JoinHandle<()>>,
}

impl UrlValidator {
    pub fn new(backend: Arc<dyn ProfileBackend>, config: ValidatorConfig) -> Self {
        let (slot, _) = watch::channel(ValidationSnapshot::default());

        Self {
            backend,
            config,
            slot: Arc::new(slot),
            pending: None,
        }
    }

    /// Record new field text and reschedule the check
    ///
    /// Returns immediately; the check runs after the quiet period unless
    /// another edit arrives first.
    pub fn on_edit(&mut self, text: impl Into<String>) {
        let text = text.into();
        let mut generation = 0;

        self.slot.send_modify(|snapshot| {
            snapshot.text = text;
            snapshot.generation += 1;
            // the previous check can no longer land
            snapshot.in_flight = false;
            generation = snapshot.generation;
        });

        if let Some(timer) = self.pending.take() {
            timer.abort();
        }

        let backend = Arc::clone(&self.backend);
        let slot = Arc::clone(&self.slot);
        let debounce = self.config.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            fire_check(backend, slot, generation);
        }));
    }

    /// Current state of the field
    pub fn snapshot(&self) -> ValidationSnapshot {
        self.slot.borrow().clone()
    }

    pub fn state(&self) -> ValidationState {
        self.slot.borrow().state
    }

    pub fn text(&self) -> String {
        self.slot.borrow().text.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.slot.borrow().in_flight
    }

    /// Watch every change to the field
    pub fn subscribe(&self) -> watch::Receiver<ValidationSnapshot> {
        self.slot.subscribe()
    }

    /// Clear the field without scheduling a check
    pub fn clear(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }

        self.slot.send_modify(|snapshot| {
            snapshot.text.clear();
            snapshot.state = ValidationState::Unknown;
            snapshot.in_flight = false;
            snapshot.generation += 1;
        });
    }
}

impl Drop for UrlValidator {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}

/// Run the check for `generation` once its quiet period has elapsed
fn fire_check(
    backend: Arc<dyn ProfileBackend>,
    slot: Arc<watch::Sender<ValidationSnapshot>>,
    generation: u64,
) {
    let mut url = String::new();

    let issued = slot.send_if_modified(|snapshot| {
        if snapshot.generation != generation {
            return false;
        }

        let trimmed = snapshot.text.trim();
        if trimmed.is_empty() {
            let changed = snapshot.state != ValidationState::Unknown;
            snapshot.state = ValidationState::Unknown;
            return changed;
        }

        url = trimmed.to_string();
        snapshot.state = ValidationState::Pending;
        snapshot.in_flight = true;
        true
    });

    if !issued || url.is_empty() {
        return;
    }

    tracing::debug!(generation, url = %url, "Validating profile URL");

    // In-flight requests are never aborted; stale answers are dropped on arrival.
    tokio::spawn(async move {
        let verdict = match backend.validate_url(&url).await {
            Ok(true) => ValidationState::Valid,
            Ok(false) => ValidationState::Invalid,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "URL validation failed");
                ValidationState::Invalid
            }
        };

        let applied = slot.send_if_modified(|snapshot| {
            if snapshot.generation != generation {
                return false;
            }
            snapshot.state = verdict;
            snapshot.in_flight = false;
            true
        });

        if applied {
            tracing::debug!(generation, state = %verdict, "Validation result applied");
        } else {
            tracing::debug!(generation, "Discarding stale validation result");
        }
    });
}

//! Dashboard Session
//!
//! One user's view of the dashboard: the URL field with its validator, the
//! profile currently displayed and the last error message.
//!
//! ```text
//! edit → validator (debounced) → Valid / Invalid
//! submit → fetch profile → store → Dashboard::from_profile → render
//! ```
//!
//! `submit` takes `&mut self`, so a second submission cannot start while a
//! fetch is in flight.

mod error;

pub use error::{DashboardError, DEFAULT_REJECTION};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::client::ProfileBackend;
use crate::metrics::Dashboard;
use crate::profile::{demo_profile, RawProfile};
use crate::validator::{UrlValidator, ValidationState, ValidatorConfig};

/// Where the displayed profile came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProfileOrigin {
    Remote { url: String },
    Demo,
}

/// Profile currently on display
#[derive(Debug, Clone, Serialize)]
pub struct LoadedProfile {
    pub profile: RawProfile,
    pub origin: ProfileOrigin,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedProfile {
    /// Derive every display dataset
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_profile(&self.profile)
    }
}

/// URL field, current profile and error slot for one user
pub struct DashboardSession {
    backend: Arc<dyn ProfileBackend>,
    validator: UrlValidator,
    current: Option<LoadedProfile>,
    error: Option<String>,
}

impl DashboardSession {
    pub fn new(backend: Arc<dyn ProfileBackend>, config: ValidatorConfig) -> Self {
        let validator = UrlValidator::new(Arc::clone(&backend), config);

        Self {
            backend,
            validator,
            current: None,
            error: None,
        }
    }

    /// Record new URL text (validation follows after the quiet period)
    pub fn edit(&mut self, text: impl Into<String>) {
        self.validator.on_edit(text);
    }

    pub fn validator(&self) -> &UrlValidator {
        &self.validator
    }

    pub fn validation_state(&self) -> ValidationState {
        self.validator.state()
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        !self.validator.state().blocks_submit()
    }

    /// Fetch the profile for the current URL text
    ///
    /// On success the fetched profile replaces the displayed one and the
    /// error slot is cleared. On failure the error message is recorded and
    /// the displayed profile is left as it was.
    pub async fn submit(&mut self) -> Result<&LoadedProfile, DashboardError> {
        match self.fetch().await {
            Ok(loaded) => {
                self.error = None;
                Ok(&*self.current.insert(loaded))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch(&self) -> Result<LoadedProfile, DashboardError> {
        let text = self.validator.text();
        let url = text.trim();

        if url.is_empty() {
            return Err(DashboardError::EmptyInput);
        }
        if self.validator.state().blocks_submit() {
            return Err(DashboardError::InvalidUrl);
        }

        tracing::info!(url = %url, "Fetching profile");

        let reply = self.backend.fetch_profile(url).await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Profile fetch failed");
            DashboardError::Unreachable
        })?;

        match (reply.success, reply.data) {
            (true, Some(profile)) => {
                tracing::info!(url = %url, fields = profile.len(), "Profile loaded");
                Ok(LoadedProfile {
                    profile,
                    origin: ProfileOrigin::Remote {
                        url: url.to_string(),
                    },
                    loaded_at: Utc::now(),
                })
            }
            _ => {
                let message = reply
                    .error
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
                tracing::warn!(url = %url, message = %message, "Profile request rejected");
                Err(DashboardError::RemoteRejected(message))
            }
        }
    }

    /// Display the built-in sample profile
    pub fn load_demo(&mut self) -> &LoadedProfile {
        self.error = None;
        self.current.insert(LoadedProfile {
            profile: demo_profile(),
            origin: ProfileOrigin::Demo,
            loaded_at: Utc::now(),
        })
    }

    /// Return to the input screen ("New Analysis")
    pub fn reset(&mut self) {
        self.current = None;
        self.error = None;
    }

    pub fn current(&self) -> Option<&LoadedProfile> {
        self.current.as_ref()
    }

    /// Derived datasets for the displayed profile
    pub fn dashboard(&self) -> Option<Dashboard> {
        self.current.as_ref().map(LoadedProfile::dashboard)
    }

    /// Message from the last failed submission
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

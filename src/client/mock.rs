//! In-memory backend for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::{ClientError, ProfileBackend};
use crate::api::dto::ProfileResponse;

/// Scripted backend recording every call it receives
#[derive(Default)]
pub struct MockBackend {
    verdicts: HashMap<String, bool>,
    delays: HashMap<String, Duration>,
    unreachable: bool,
    profile: Option<ProfileResponse>,
    validate_calls: Mutex<Vec<String>>,
    profile_calls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `valid` for `url` (unknown URLs are invalid)
    pub fn verdict(mut self, url: &str, valid: bool) -> Self {
        self.verdicts.insert(url.to_string(), valid);
        self
    }

    /// Delay every response for `url`
    pub fn delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    /// Fail every call as if the backend were down
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Reply to profile requests with `response`
    pub fn profile(mut self, response: ProfileResponse) -> Self {
        self.profile = Some(response);
        self
    }

    pub fn validate_calls(&self) -> Vec<String> {
        self.validate_calls.lock().unwrap().clone()
    }

    pub fn profile_calls(&self) -> Vec<String> {
        self.profile_calls.lock().unwrap().clone()
    }

    async fn wait_for(&self, url: &str) {
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl ProfileBackend for MockBackend {
    async fn validate_url(&self, url: &str) -> Result<bool, ClientError> {
        self.validate_calls.lock().unwrap().push(url.to_string());
        self.wait_for(url).await;

        if self.unreachable {
            return Err(ClientError::Unavailable);
        }
        Ok(self.verdicts.get(url).copied().unwrap_or(false))
    }

    async fn fetch_profile(&self, url: &str) -> Result<ProfileResponse, ClientError> {
        self.profile_calls.lock().unwrap().push(url.to_string());
        self.wait_for(url).await;

        if self.unreachable {
            return Err(ClientError::Unavailable);
        }
        Ok(self.profile.clone().unwrap_or_default())
    }
}

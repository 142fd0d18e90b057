//! Backend Client
//!
//! The profile backend exposes two endpoints:
//!
//! - `POST /api/validate-url` - is this a well-formed profile URL?
//! - `POST /api/profile` - extract the profile's counters
//!
//! [`ProfileBackend`] is the seam the validator and the dashboard session
//! talk to; [`BackendClient`] is its HTTP implementation.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::{BackendClient, BackendConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::api::dto::ProfileResponse;

/// Remote collaborator answering validation and profile requests
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// Ask whether `url` is an acceptable profile URL
    async fn validate_url(&self, url: &str) -> Result<bool, ClientError>;

    /// Request the raw profile behind `url`
    async fn fetch_profile(&self, url: &str) -> Result<ProfileResponse, ClientError>;
}

/// Transport-level failures talking to the backend
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Invalid response (status {status}): {message}")]
    InvalidResponse { status: u16, message: String },
}

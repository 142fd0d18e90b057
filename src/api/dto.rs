//! Data Transfer Objects
//!
//! Request and response bodies of the backend endpoints. The client and the
//! server share these so both sides agree on the wire format.

use serde::{Deserialize, Serialize};

use crate::profile::RawProfile;

/// Body of both POST endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRequest {
    #[serde(default)]
    pub url: String,
}

impl UrlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// POST /api/validate-url response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// Missing verdicts read as invalid
    #[serde(default)]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/profile response
///
/// Rejections arrive as `{"error": "..."}` with no `success` field, which
/// reads as `success: false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RawProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProfileResponse {
    pub fn extracted(data: RawProfile) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: Some("Profile data extracted successfully".to_string()),
        }
    }
}

/// GET / response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub version: String,
    #[serde(default)]
    pub uptime_seconds: u64,
    #[serde(default)]
    pub endpoints: Vec<EndpointInfo>,
}

/// One entry of the health document's endpoint list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub route: String,
    pub description: String,
}

//! Backend REST API Client
//!
//! HTTP client for the profile backend's validation and profile endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::{ClientError, ProfileBackend};
use crate::api::dto::{HealthResponse, ProfileResponse, UrlRequest, ValidateResponse};

/// Backend REST API client
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_ms: 60_000,
        }
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl BackendClient {
    /// Create a new backend client with the given configuration
    pub fn new(config: BackendConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Fetch the backend's health document
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint("/");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        decode(status, response).await
    }

    /// POST a JSON body and decode the JSON reply whatever its status code
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "Backend responded");

        decode(status, response).await
    }
}

#[async_trait]
impl ProfileBackend for BackendClient {
    async fn validate_url(&self, url: &str) -> Result<bool, ClientError> {
        let reply: ValidateResponse = self
            .post_json("/api/validate-url", &UrlRequest::new(url))
            .await?;
        Ok(reply.valid)
    }

    async fn fetch_profile(&self, url: &str) -> Result<ProfileResponse, ClientError> {
        self.post_json("/api/profile", &UrlRequest::new(url)).await
    }
}

fn classify(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout
    } else if error.is_connect() {
        ClientError::Unavailable
    } else {
        ClientError::Request(error)
    }
}

async fn decode<T: DeserializeOwned>(
    status: StatusCode,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let text = response.text().await.map_err(classify)?;

    serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse {
        status: status.as_u16(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(BackendConfig {
            base_url: server.base_url(),
            request_timeout_ms: 2000,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_ms, 60_000);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = BackendClient::new(BackendConfig::new("http://backend:5000/")).unwrap();
        assert_eq!(
            client.endpoint("/api/profile"),
            "http://backend:5000/api/profile"
        );
    }

    #[tokio::test]
    async fn test_validate_url_sends_url_and_reads_verdict() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/validate-url")
                    .json_body(json!({"url": "http://www.skillrack.com/profile/1/ab"}));
                then.status(200)
                    .json_body(json!({"valid": true, "message": "Valid SkillRack profile URL"}));
            })
            .await;

        let valid = client_for(&server)
            .validate_url("http://www.skillrack.com/profile/1/ab")
            .await
            .unwrap();

        assert!(valid);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_profile_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/profile");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": {"GOLD": "1", "DT": "4"},
                    "message": "Profile data extracted successfully"
                }));
            })
            .await;

        let reply = client_for(&server).fetch_profile("u").await.unwrap();

        assert!(reply.success);
        let data = reply.data.unwrap();
        assert_eq!(data.count("DT"), 4);
    }

    #[tokio::test]
    async fn test_fetch_profile_reads_rejection_body_on_400() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/profile");
                then.status(400)
                    .json_body(json!({"error": "Invalid SkillRack profile URL format"}));
            })
            .await;

        let reply = client_for(&server).fetch_profile("u").await.unwrap();

        assert!(!reply.success);
        assert_eq!(
            reply.error.as_deref(),
            Some("Invalid SkillRack profile URL format")
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/validate-url");
                then.status(502).body("<html>Bad Gateway</html>");
            })
            .await;

        let err = client_for(&server).validate_url("u").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let client = BackendClient::new(BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_ms: 2000,
        })
        .unwrap();

        let err = client.validate_url("u").await.unwrap_err();
        assert!(matches!(err, ClientError::Unavailable));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).json_body(json!({
                    "message": "SkillBoard API is running!",
                    "status": "healthy",
                    "version": "0.1.0",
                    "endpoints": []
                }));
            })
            .await;

        let health = client_for(&server).health().await.unwrap();
        assert_eq!(health.status, "healthy");
    }
}

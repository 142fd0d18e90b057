//! Profile sources

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::page::parse_profile_page;
use super::{ExtractError, ProfileSource};
use crate::profile::{demo_profile, RawProfile};

/// Configuration for the page scraper
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// User-Agent header sent with page requests
    pub user_agent: String,
    /// Page load timeout in seconds
    pub page_timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            page_timeout_secs: 30,
        }
    }
}

/// Downloads profile pages over HTTP and parses them
pub struct HttpProfileScraper {
    client: Client,
}

impl HttpProfileScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.page_timeout_secs))
            .build()
            .map_err(|e| ExtractError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ProfileSource for HttpProfileScraper {
    fn name(&self) -> &str {
        "http"
    }

    async fn extract(&self, url: &str) -> Result<RawProfile, ExtractError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Profile page request failed");
            return Err(ExtractError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        tracing::info!(url = %url, bytes = html.len(), "Page loaded successfully");

        Ok(parse_profile_page(&html))
    }
}

/// Serves the built-in sample profile for every URL
#[derive(Debug, Default)]
pub struct DemoProfileSource;

#[async_trait]
impl ProfileSource for DemoProfileSource {
    fn name(&self) -> &str {
        "demo"
    }

    async fn extract(&self, _url: &str) -> Result<RawProfile, ExtractError> {
        Ok(demo_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fields;
    use httpmock::prelude::*;

    const PAGE: &str = r#"<div class="content"><div class="ui big label black">GRACE</div><br>R1<br>Navy College<br>2026<br></div>
<div class="ui large label">ECE</div>
<div class="statistic"><div class="value">55</div><div class="label">DC</div></div>"#;

    #[tokio::test]
    async fn test_scraper_parses_downloaded_page() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/profile/1/ab")
                    .header("user-agent", "skillboard-test");
                then.status(200).body(PAGE);
            })
            .await;

        let scraper = HttpProfileScraper::new(&ScraperConfig {
            user_agent: "skillboard-test".to_string(),
            page_timeout_secs: 5,
        })
        .unwrap();

        let profile = scraper.extract(&server.url("/profile/1/ab")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(profile.get(fields::NAME), Some("GRACE"));
        assert_eq!(profile.get(fields::COLLEGE), Some("Navy College"));
        assert_eq!(profile.get(fields::DEPARTMENT), Some("ECE"));
        assert_eq!(profile.count(fields::DC), 55);
    }

    #[tokio::test]
    async fn test_scraper_reports_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/profile/1/ab");
                then.status(404);
            })
            .await;

        let scraper = HttpProfileScraper::new(&ScraperConfig::default()).unwrap();
        let err = scraper
            .extract(&server.url("/profile/1/ab"))
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::Status(404)));
    }

    #[tokio::test]
    async fn test_demo_source() {
        let profile = DemoProfileSource.extract("anything").await.unwrap();
        assert_eq!(profile.count(fields::BRONZE), 421);
    }
}

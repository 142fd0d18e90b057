//! Profile Extraction
//!
//! Server-side counterpart of the backend client: checks profile URL format
//! and turns a profile page into a [`RawProfile`].
//!
//! ## Sources
//!
//! - [`HttpProfileScraper`]: downloads the profile page and parses it
//! - [`DemoProfileSource`]: answers every request with the sample profile

mod page;
mod source;

pub use page::parse_profile_page;
pub use source::{DemoProfileSource, HttpProfileScraper, ScraperConfig};

use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::profile::RawProfile;

/// Something that can produce a profile for a URL
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    /// Extract the profile behind `url` (format already checked)
    async fn extract(&self, url: &str) -> Result<RawProfile, ExtractError>;
}

/// Errors that can occur while extracting a profile
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid SkillRack profile URL format")]
    InvalidUrl,

    #[error("Failed to initialize HTTP client: {0}")]
    Client(String),

    #[error("Failed to load profile page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Profile page returned status {0}")]
    Status(u16),
}

fn profile_url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^http://www\.skillrack\.com/profile/\d+/[a-f0-9]+")
            .expect("valid profile URL pattern")
    })
}

/// Check that `url` looks like a SkillRack profile URL
///
/// Only the prefix is checked; trailing text after the hash is accepted.
pub fn is_profile_url(url: &str) -> bool {
    profile_url_pattern().is_match(url)
}

/// Validate `url`, extract it from `source` and fill required defaults
pub async fn extract_profile(
    source: &dyn ProfileSource,
    url: &str,
) -> Result<RawProfile, ExtractError> {
    if !is_profile_url(url) {
        return Err(ExtractError::InvalidUrl);
    }

    tracing::info!(url = %url, source = source.name(), "Starting data extraction");
    let profile = source.extract(url).await?;
    tracing::info!(url = %url, fields = profile.len(), "Data extraction completed");

    Ok(profile.with_required_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{fields, REQUIRED_FIELDS};

    struct FixedSource(RawProfile);

    #[async_trait]
    impl ProfileSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn extract(&self, _url: &str) -> Result<RawProfile, ExtractError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_profile_url_format() {
        assert!(is_profile_url("http://www.skillrack.com/profile/123456/abcdef0123"));
        assert!(is_profile_url("http://www.skillrack.com/profile/1/a?tab=stats"));
        assert!(!is_profile_url("https://www.skillrack.com/profile/1/ab"));
        assert!(!is_profile_url("http://www.skillrack.com/profile/abc/ab"));
        assert!(!is_profile_url("http://www.skillrack.com/profile/1/XYZ"));
        assert!(!is_profile_url(" http://www.skillrack.com/profile/1/ab"));
        assert!(!is_profile_url(""));
    }

    #[tokio::test]
    async fn test_extract_rejects_bad_url_before_source() {
        let source = FixedSource(RawProfile::new());
        let err = extract_profile(&source, "http://example.com").await.unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUrl));
    }

    #[tokio::test]
    async fn test_extract_fills_required_defaults() {
        let source = FixedSource(RawProfile::new().field(fields::GOLD, "2"));
        let profile = extract_profile(&source, "http://www.skillrack.com/profile/9/f00")
            .await
            .unwrap();

        assert_eq!(profile.get(fields::GOLD), Some("2"));
        for (key, _) in REQUIRED_FIELDS {
            assert!(profile.contains(key));
        }
    }
}

//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api;
use crate::client::BackendConfig;
use crate::scraper::ScraperConfig;
use crate::validator::ValidatorConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub scraper: ScraperSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_client_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_client_timeout() -> u64 {
    60_000
}

fn default_debounce() -> u64 {
    500
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_client_timeout(),
            debounce_ms: default_debounce(),
        }
    }
}

impl ClientConfig {
    pub fn backend(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }

    pub fn validator(&self) -> ValidatorConfig {
        ValidatorConfig {
            debounce: Duration::from_millis(self.debounce_ms),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn server(&self) -> api::ApiConfig {
        api::ApiConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Profile page scraper configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Serve the sample profile instead of downloading pages
    #[serde(default)]
    pub demo_mode: bool,
}

fn default_user_agent() -> String {
    ScraperConfig::default().user_agent
}

fn default_page_timeout() -> u64 {
    30
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            page_timeout_secs: default_page_timeout(),
            demo_mode: false,
        }
    }
}

impl ScraperSettings {
    pub fn scraper(&self) -> ScraperConfig {
        ScraperConfig {
            user_agent: self.user_agent.clone(),
            page_timeout_secs: self.page_timeout_secs,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here; this runs before the subscriber exists.
    /// Callers report the outcome with [`ConfigLoad::report`].
    pub fn load_default() -> ConfigLoad {
        Self::load_first(&default_paths())
    }

    /// Load the first readable file among `paths`, falling back to defaults
    ///
    /// Files that exist but fail to load are recorded and skipped.
    pub fn load_first(paths: &[PathBuf]) -> ConfigLoad {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        ConfigLoad {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Client overrides
        if let Some(url) = var("SKILLBOARD_API_URL") {
            self.client.base_url = url;
        }
        if let Some(ms) = var("SKILLBOARD_DEBOUNCE_MS").and_then(|v| v.parse().ok()) {
            self.client.debounce_ms = ms;
        }

        // API overrides
        if let Some(host) = var("SKILLBOARD_HOST") {
            self.api.host = host;
        }
        let port = var("SKILLBOARD_PORT").or_else(|| var("PORT"));
        if let Some(p) = port.and_then(|v| v.parse().ok()) {
            self.api.port = p;
        }

        // Scraper overrides
        if let Some(flag) = var("SKILLBOARD_DEMO_MODE") {
            self.scraper.demo_mode = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        // Logging overrides
        if let Some(level) = var("SKILLBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SKILLBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of a default-location config lookup
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// File the config came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl ConfigLoad {
    /// Log where the config came from and every file that was skipped
    pub fn report(&self) {
        for error in &self.skipped {
            tracing::warn!("Skipping config file: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Config file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("skillboard").join("config.toml")),
        Some(PathBuf::from("/etc/skillboard/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SkillBoard Configuration
#
# Environment variables override these settings:
# - SKILLBOARD_API_URL
# - SKILLBOARD_DEBOUNCE_MS
# - SKILLBOARD_HOST
# - SKILLBOARD_PORT (or PORT)
# - SKILLBOARD_DEMO_MODE
# - SKILLBOARD_LOG_LEVEL
# - SKILLBOARD_LOG_FORMAT

[client]
# Backend API the dashboard talks to
base_url = "http://localhost:5000"

# Backend request timeout (ms)
request_timeout_ms = 60000

# Quiet period after the last URL edit before validating (ms)
debounce_ms = 500

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 5000

# Allowed CORS origins (empty allows any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 60

[scraper]
# User-Agent sent when downloading profile pages
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"

# Profile page timeout in seconds
page_timeout_secs = 30

# Answer every profile request with the sample profile
demo_mode = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.client.base_url, "http://localhost:5000");
        assert_eq!(config.client.validator().debounce, Duration::from_millis(500));
        assert_eq!(config.api.server().addr(), "0.0.0.0:5000");
        assert!(!config.scraper.demo_mode);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.client.base_url, defaults.client.base_url);
        assert_eq!(config.client.debounce_ms, defaults.client.debounce_ms);
        assert_eq!(config.api.port, defaults.api.port);
        assert_eq!(config.scraper.user_agent, defaults.scraper.user_agent);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[client]\nbase_url = \"http://backend:9000\"\n\n[scraper]\ndemo_mode = true"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.client.backend().base_url, "http://backend:9000");
        assert_eq!(config.client.request_timeout_ms, 60_000);
        assert!(config.scraper.demo_mode);
        assert_eq!(config.api.port, 5000);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/skillboard.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = \"not a number\"").unwrap();
        let bad = Config::load(file.path()).unwrap_err();
        assert!(matches!(bad, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[
            ("SKILLBOARD_API_URL", "http://api.internal"),
            ("SKILLBOARD_DEBOUNCE_MS", "250"),
            ("SKILLBOARD_PORT", "8080"),
            ("SKILLBOARD_DEMO_MODE", "TRUE"),
            ("SKILLBOARD_LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.client.base_url, "http://api.internal");
        assert_eq!(config.client.debounce_ms, 250);
        assert_eq!(config.api.port, 8080);
        assert!(config.scraper.demo_mode);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_port_fallback_and_bad_numbers() {
        let mut config = Config::default();
        config.apply_overrides(overrides(&[("PORT", "7000"), ("SKILLBOARD_DEBOUNCE_MS", "soon")]));
        assert_eq!(config.api.port, 7000);
        assert_eq!(config.client.debounce_ms, 500);

        config.apply_overrides(overrides(&[("PORT", "7000"), ("SKILLBOARD_PORT", "7100")]));
        assert_eq!(config.api.port, 7100);
    }

    #[test]
    fn test_malformed_file_in_search_path_is_reported() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "[api\nport = 1").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[api]\nhost = \"127.0.0.1\"").unwrap();

        let paths = vec![
            PathBuf::from("/nonexistent/skillboard/config.toml"),
            bad.path().to_path_buf(),
            good.path().to_path_buf(),
        ];
        let loaded = Config::load_first(&paths);

        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(&loaded.skipped[0], ConfigError::Parse { path, .. } if path == bad.path()));
        assert_eq!(loaded.source.as_deref(), Some(good.path()));
        assert_eq!(loaded.config.api.host, "127.0.0.1");
    }

    #[test]
    fn test_only_malformed_files_fall_back_to_defaults() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "not = [valid").unwrap();

        let loaded = Config::load_first(&[bad.path().to_path_buf()]);

        assert!(loaded.source.is_none());
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.config.client.request_timeout_ms, 60_000);
    }
}

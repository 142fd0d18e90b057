//! # SkillBoard
//!
//! SkillRack profile analytics - a dashboard core that validates profile
//! URLs as they are typed, fetches profiles from a backend and derives
//! score breakdowns, language usage and medal counts.
//!
//! ## Features
//!
//! - **Debounced validation**: one backend check per burst of edits, stale
//!   answers discarded
//! - **Metrics**: weighted score breakdown, completion percentages,
//!   language shares, medal counts
//! - **Backend API**: Axum server that checks URLs and extracts profiles
//! - **Demo mode**: a built-in sample profile, no network needed
//!
//! ## Modules
//!
//! - [`profile`]: Raw profile mapping and field names
//! - [`metrics`]: Derived dashboard datasets
//! - [`validator`]: Debounced URL validation
//! - [`client`]: Backend client and its trait seam
//! - [`session`]: Submit flow and dashboard state
//! - [`scraper`]: Server-side URL check and page extraction
//! - [`api`]: REST API server with Axum
//! - [`render`]: Text and JSON output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skillboard::client::{BackendClient, BackendConfig};
//! use skillboard::session::DashboardSession;
//! use skillboard::validator::ValidatorConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = Arc::new(BackendClient::new(BackendConfig::default())?);
//!     let mut session = DashboardSession::new(backend, ValidatorConfig::default());
//!
//!     session.edit("http://www.skillrack.com/profile/123456/abcdef");
//!     let loaded = session.submit().await?;
//!
//!     let dashboard = loaded.dashboard();
//!     println!("{} points", dashboard.metrics.total_points);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod profile;
pub mod render;
pub mod scraper;
pub mod session;
pub mod validator;

// Re-export top-level types for convenience
pub use profile::{demo_profile, RawProfile};

pub use metrics::{
    calculate_points, language_usage, medal_counts, Dashboard, DerivedMetrics, LanguageUsage,
    MedalCount,
};

pub use validator::{UrlValidator, ValidationSnapshot, ValidationState, ValidatorConfig};

pub use client::{BackendClient, BackendConfig, ClientError, ProfileBackend};

pub use session::{DashboardError, DashboardSession, LoadedProfile, ProfileOrigin};

pub use scraper::{
    extract_profile, is_profile_url, DemoProfileSource, ExtractError, HttpProfileScraper,
    ProfileSource,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, ConfigLoad, LoggingConfig};

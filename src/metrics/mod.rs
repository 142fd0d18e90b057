//! Metrics
//!
//! Turns a raw profile into the datasets the dashboard displays:
//!
//! - **Score breakdown**: five weighted categories, total points and
//!   completion percentages
//! - **Language usage**: solved counts per tracked language
//! - **Medal counts**: Gold, Silver, Bronze
//! - **Summary**: the identity header cards
//!
//! Everything is derived fresh from the profile on every call.

mod aggregator;
mod summary;
mod tables;

pub use aggregator::{
    calculate_points, language_usage, medal_counts, round_to, BreakdownEntry, DerivedMetrics,
    LanguageUsage, MedalCount,
};
pub use summary::ProfileSummary;
pub use tables::{
    Medal, ScoreCategory, LANGUAGES, LANGUAGE_PALETTE, MEDALS, POINTS_TARGET, SCORE_CATEGORIES,
    SOLVED_TARGET,
};

use serde::Serialize;

use crate::profile::RawProfile;

/// All derived views for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: ProfileSummary,
    pub metrics: DerivedMetrics,
    pub languages: Vec<LanguageUsage>,
    pub medals: [MedalCount; 3],
}

impl Dashboard {
    pub fn from_profile(profile: &RawProfile) -> Self {
        Self {
            summary: ProfileSummary::from_profile(profile),
            metrics: calculate_points(profile),
            languages: language_usage(profile),
            medals: medal_counts(profile),
        }
    }
}

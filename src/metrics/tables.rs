//! Fixed scoring tables
//!
//! Category order, weights, language order and medal colors are part of the
//! output contract and never change at runtime.

use crate::profile::fields;
use serde::Serialize;

/// One scoring bucket with a fixed point multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCategory {
    /// Display name
    pub name: &'static str,
    /// Profile field holding the raw count
    pub field: &'static str,
    /// Points per solved item
    pub weight: i64,
}

/// Score categories in display order
///
/// Code Tutor carries weight 0; its count is still shown.
pub const SCORE_CATEGORIES: [ScoreCategory; 5] = [
    ScoreCategory {
        name: "Code Tutor",
        field: fields::CODE_TUTOR,
        weight: 0,
    },
    ScoreCategory {
        name: "Code Track",
        field: fields::CODE_TRACK,
        weight: 2,
    },
    ScoreCategory {
        name: "DC",
        field: fields::DC,
        weight: 2,
    },
    ScoreCategory {
        name: "DT",
        field: fields::DT,
        weight: 20,
    },
    ScoreCategory {
        name: "Code Test",
        field: fields::CODE_TEST,
        weight: 30,
    },
];

/// Denominator for the solved-programs percentage
pub const SOLVED_TARGET: i64 = 2000;

/// Denominator for the points percentage
pub const POINTS_TARGET: i64 = 5000;

/// Tracked languages in display order
pub const LANGUAGES: [&str; 5] = [
    fields::C,
    fields::PYTHON3,
    fields::JAVA,
    fields::CPP23,
    fields::CPP,
];

/// Chart colors assigned to listed languages by position
pub const LANGUAGE_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// Medal tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

/// Medal tiers in display order
pub const MEDALS: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

impl Medal {
    pub fn name(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }

    /// Profile field holding the medal count
    pub fn field(&self) -> &'static str {
        match self {
            Medal::Gold => fields::GOLD,
            Medal::Silver => fields::SILVER,
            Medal::Bronze => fields::BRONZE,
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Medal::Gold => "#FFD700",
            Medal::Silver => "#C0C0C0",
            Medal::Bronze => "#CD7F32",
        }
    }
}

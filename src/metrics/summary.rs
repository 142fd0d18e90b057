//! Profile header cards

use serde::Serialize;

use crate::profile::{fields, RawProfile};

/// Identity and standing fields shown above the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub roll_number: String,
    pub department: String,
    pub college: String,
    pub year: String,
    pub rank: String,
    pub level: String,
}

impl ProfileSummary {
    pub fn from_profile(profile: &RawProfile) -> Self {
        Self {
            name: profile.text(fields::NAME).to_string(),
            roll_number: profile.text(fields::ROLL_NUMBER).to_string(),
            department: profile.text(fields::DEPARTMENT).to_string(),
            college: profile.text(fields::COLLEGE).to_string(),
            year: profile.text(fields::YEAR).to_string(),
            rank: profile.text(fields::RANK).to_string(),
            level: profile.text(fields::LEVEL).to_string(),
        }
    }
}

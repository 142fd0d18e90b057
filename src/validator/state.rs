//! Validation state

use serde::Serialize;
use std::fmt;

/// Verdict shown next to the URL field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ValidationState {
    /// Nothing checked yet, or the field is blank
    #[default]
    Unknown,
    /// A check has been issued and not answered
    Pending,
    Valid,
    Invalid,
}

impl ValidationState {
    /// Submission is disabled while the URL is known to be invalid
    pub fn blocks_submit(&self) -> bool {
        matches!(self, ValidationState::Invalid)
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationState::Unknown => "unknown",
            ValidationState::Pending => "checking",
            ValidationState::Valid => "valid",
            ValidationState::Invalid => "invalid",
        };
        f.write_str(label)
    }
}

/// Everything an observer of the URL field needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSnapshot {
    /// Current field text, untrimmed
    pub text: String,
    pub state: ValidationState,
    /// The check for the current text is awaiting a response
    pub in_flight: bool,
    /// Bumped on every edit; results carrying an older value are dropped
    pub generation: u64,
}

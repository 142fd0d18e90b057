//! Submission errors
//!
//! Every variant ends the current attempt only. Display text is what the
//! user sees.

use thiserror::Error;

/// Default message when the backend rejects without saying why
pub const DEFAULT_REJECTION: &str = "Failed to fetch profile data";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Blank URL field at submit time
    #[error("Please enter a valid SkillRack profile URL")]
    EmptyInput,

    /// The backend said the URL is not a profile URL
    #[error("Please enter a valid SkillRack profile URL")]
    InvalidUrl,

    /// The backend answered with success: false
    #[error("{0}")]
    RemoteRejected(String),

    /// Network or transport failure
    #[error("Unable to connect to server. Please try again later.")]
    Unreachable,
}

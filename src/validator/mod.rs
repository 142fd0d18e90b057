//! URL Validation
//!
//! Debounced remote validation of the profile URL field. Edits are recorded
//! synchronously; the backend is asked only once the text has been stable
//! for the quiet period, and only the answer for the newest edit is ever
//! shown.

mod debounce;
mod state;

pub use debounce::{UrlValidator, ValidatorConfig};
pub use state::{ValidationSnapshot, ValidationState};

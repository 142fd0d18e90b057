//! Profile Data
//!
//! The raw profile mapping produced by the backend, the field names it uses,
//! and the built-in demo profile.

mod demo;
mod types;

pub use demo::demo_profile;
pub use types::{fields, parse_count, RawProfile, NOT_FOUND, REQUIRED_FIELDS};

//! Raw profile data as supplied by the backend
//!
//! A profile is a flat mapping of field names to string values. Counters
//! ("CODE TRACK", "GOLD", "C", ...) and text fields ("Name", "College", ...)
//! share the same map; interpretation happens at read time.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Field names as they appear in the backend payload
pub mod fields {
    pub const NAME: &str = "Name";
    pub const ROLL_NUMBER: &str = "Roll Number";
    pub const DEPARTMENT: &str = "Department";
    pub const COLLEGE: &str = "College";
    pub const YEAR: &str = "Year";

    pub const RANK: &str = "RANK";
    pub const LEVEL: &str = "LEVEL";
    pub const GOLD: &str = "GOLD";
    pub const SILVER: &str = "SILVER";
    pub const BRONZE: &str = "BRONZE";
    pub const PROGRAMS_SOLVED: &str = "PROGRAMS SOLVED";
    pub const CODE_TEST: &str = "CODE TEST";
    pub const CODE_TRACK: &str = "CODE TRACK";
    pub const DC: &str = "DC";
    pub const DT: &str = "DT";
    pub const CODE_TUTOR: &str = "CODE TUTOR";

    pub const C: &str = "C";
    pub const PYTHON3: &str = "Python3";
    pub const JAVA: &str = "Java";
    pub const CPP23: &str = "CPP23";
    pub const CPP: &str = "CPP";
}

/// Placeholder for text fields the page did not contain
pub const NOT_FOUND: &str = "Not Found";

/// Fields every extracted profile carries, with the value used when the
/// page does not show them
pub const REQUIRED_FIELDS: [(&str, &str); 16] = [
    (fields::RANK, "0"),
    (fields::LEVEL, "0/10"),
    (fields::GOLD, "0"),
    (fields::SILVER, "0"),
    (fields::BRONZE, "0"),
    (fields::PROGRAMS_SOLVED, "0"),
    (fields::CODE_TEST, "0"),
    (fields::CODE_TRACK, "0"),
    (fields::DC, "0"),
    (fields::DT, "0"),
    (fields::CODE_TUTOR, "0"),
    (fields::C, "0"),
    (fields::PYTHON3, "0"),
    (fields::JAVA, "0"),
    (fields::CPP23, "0"),
    (fields::CPP, "0"),
];

/// Backend-supplied profile: field name → string value
///
/// Immutable once received. Numeric reads never fail; a missing or
/// non-numeric field counts as zero. Numbers and booleans in the payload
/// are kept as their text; nulls, arrays and objects are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProfile {
    #[serde(deserialize_with = "scalar_fields")]
    fields: BTreeMap<String, String>,
}

fn scalar_fields<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
        .collect())
}

fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl RawProfile {
    /// Create an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a field
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field in place (used while assembling a profile)
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw string value of a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Text value of a field, or "Not Found"
    pub fn text(&self, key: &str) -> &str {
        self.get(key).unwrap_or(NOT_FOUND)
    }

    /// Integer value of a field, 0 when missing or non-numeric
    pub fn count(&self, key: &str) -> i64 {
        self.get(key).map(parse_count).unwrap_or(0)
    }

    /// Check if a field is present
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill every required field the profile lacks with its default value
    pub fn with_required_defaults(mut self) -> Self {
        for (key, default) in REQUIRED_FIELDS {
            self.fields
                .entry(key.to_string())
                .or_insert_with(|| default.to_string());
        }
        self
    }
}

impl<K, V> FromIterator<(K, V)> for RawProfile
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse the leading integer of a string
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit ("1050 pts" → 1050, "0/10" → 0). Anything without a
/// leading digit, or that overflows, yields 0.
pub fn parse_count(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => 0,
    }
}

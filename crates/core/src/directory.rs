//! Campus-directory domain types.
//!
//! The directory API answers a single-entity lookup keyed by the stable
//! campus identifier. Its payload is schematically loose: most fields arrive
//! either as a plain string or as a one-element array of strings, depending
//! on the underlying record. The schema is validated and normalized once
//! here, at the cache boundary, instead of being probed ad hoc downstream.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// DirectoryProfile
// ---------------------------------------------------------------------------

/// One person record from the campus directory, normalized.
///
/// Every field is optional; the upstream omits whatever a record does not
/// carry. String-or-array fields are collapsed to their first trimmed
/// non-empty value at deserialization time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DirectoryProfile {
    /// Stable campus identifier.
    #[serde(default, deserialize_with = "first_string")]
    pub uid: Option<String>,

    /// Display name, e.g. `"Cormac Tantalo"`.
    #[serde(default, alias = "cn", deserialize_with = "first_string")]
    pub display_name: Option<String>,

    /// Given name.
    #[serde(default, alias = "givenName", deserialize_with = "first_string")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(default, alias = "sn", deserialize_with = "first_string")]
    pub last_name: Option<String>,

    /// Job title, e.g. `"Professor"`.
    #[serde(default, deserialize_with = "first_string")]
    pub title: Option<String>,

    /// Department or organizational unit.
    #[serde(default, alias = "dept", alias = "ou", deserialize_with = "first_string")]
    pub department: Option<String>,

    /// Campus email address.
    #[serde(default, alias = "mail", deserialize_with = "first_string")]
    pub email: Option<String>,

    /// Office phone number.
    #[serde(default, alias = "telephoneNumber", deserialize_with = "first_string")]
    pub phone: Option<String>,
}

/// Accept a string, a list of strings, or null, yielding the first trimmed
/// non-empty string.
fn first_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    let raw: Option<StringOrList> = Option::deserialize(deserializer)?;
    let first = match raw {
        None => None,
        Some(StringOrList::One(s)) => Some(s),
        Some(StringOrList::Many(items)) => items.into_iter().next(),
    };

    Ok(first
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

// ---------------------------------------------------------------------------
// DirectoryResult
// ---------------------------------------------------------------------------

/// The canonical outcome of one directory lookup.
///
/// `success` is true iff the upstream returned a usable payload. Every
/// failure mode (transport, empty payload, malformed payload, cache
/// corruption, store errors) collapses to [`DirectoryResult::failure`];
/// the directory cache never raises past its boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryResult {
    /// The person record, when the lookup succeeded.
    pub data: Option<DirectoryProfile>,
    /// Whether the lookup produced a usable record.
    pub success: bool,
}

impl DirectoryResult {
    /// A successful lookup carrying `profile`.
    pub fn ok(profile: DirectoryProfile) -> Self {
        Self {
            data: Some(profile),
            success: true,
        }
    }

    /// The absorbed-failure sentinel: `{ data: None, success: false }`.
    pub fn failure() -> Self {
        Self {
            data: None,
            success: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

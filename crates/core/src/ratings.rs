//! Ratings-service domain types.
//!
//! A ratings search is a fuzzy free-text query that returns up to
//! [`CANDIDATE_LIMIT`] candidate nodes, none of which is guaranteed to be
//! the queried person; disambiguation is the matcher's job. Field names
//! follow the upstream GraphQL schema (camelCase) on the wire.

use serde::{Deserialize, Serialize};

/// Maximum number of candidate nodes one search returns (API-capped).
pub const CANDIDATE_LIMIT: usize = 5;

/// One candidate teacher record from the ratings search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherCandidate {
    /// Opaque stable identifier.
    pub id: String,
    /// Numeric legacy identifier.
    pub legacy_id: Option<i64>,
    /// Given name as recorded by the ratings service.
    pub first_name: String,
    /// Family name as recorded by the ratings service.
    pub last_name: String,
    /// Average rating, rounded by the upstream.
    pub avg_rating_rounded: Option<f64>,
    /// Total number of ratings.
    pub num_ratings: Option<i64>,
    /// Percentage of raters who would take the teacher again.
    pub would_take_again_percent_rounded: Option<f64>,
    /// Average difficulty, rounded by the upstream.
    pub avg_difficulty_rounded: Option<f64>,
    /// Department label, when the upstream carries one.
    pub department: Option<String>,
    /// Crowd-sourced rating tags (e.g. "Tough Grader").
    pub teacher_rating_tags: Vec<RatingTag>,
}

/// One crowd-sourced tag attached to a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RatingTag {
    /// Opaque stable identifier.
    pub id: String,
    /// Numeric legacy identifier.
    pub legacy_id: Option<i64>,
    /// How many raters applied this tag.
    pub tag_count: Option<i64>,
    /// Tag label.
    pub tag_name: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

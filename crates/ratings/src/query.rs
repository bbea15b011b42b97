//! GraphQL document and query-variable construction for the teacher search.

use serde::Serialize;

use lectern_core::naming::normalize_display_name;

/// School scope used when the caller supplies none.
pub const DEFAULT_SCHOOL_ID: &str = "U2Nob29sLTEwNzg=";

/// Fixed GraphQL document: fuzzy teacher search scoped to one school,
/// capped at 5 candidates by the upstream.
pub const TEACHER_SEARCH_QUERY: &str = r#"query NewSearchTeachersQuery($text: String!, $schoolID: ID) {
  newSearch {
    teachers(query: { text: $text, schoolID: $schoolID }, first: 5) {
      edges {
        node {
          id
          legacyId
          firstName
          lastName
          avgRatingRounded
          numRatings
          wouldTakeAgainPercentRounded
          avgDifficultyRounded
          department
          teacherRatingTags {
            id
            legacyId
            tagCount
            tagName
          }
        }
      }
    }
  }
}"#;

/// Variables for [`TEACHER_SEARCH_QUERY`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchVariables {
    /// Search text, already normalized to `"First Last"` form.
    pub text: String,
    /// School scope identifier.
    #[serde(rename = "schoolID")]
    pub school_id: String,
}

/// Build the search variables for `name`, normalizing `"Last, First"`
/// display names and falling back to [`DEFAULT_SCHOOL_ID`] when no school
/// scope is supplied.
pub fn build_search_variables(name: &str, school_id: Option<&str>) -> SearchVariables {
    SearchVariables {
        text: normalize_display_name(name),
        school_id: school_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SCHOOL_ID)
            .to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

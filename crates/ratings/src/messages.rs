//! Wire shapes for the ratings GraphQL response.
//!
//! The candidate list lives at `data.newSearch.teachers.edges[].node`; every
//! level is optional because the upstream omits branches on query-level
//! failures. [`SearchResponse::into_candidates`] flattens the nesting.

use serde::Deserialize;

use lectern_core::ratings::TeacherCandidate;

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Result payload; absent on query-level failure.
    pub data: Option<SearchData>,
    /// Application-level error list; non-empty signals a query failure.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// One application-level GraphQL error.
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub new_search: Option<NewSearch>,
}

#[derive(Debug, Deserialize)]
pub struct NewSearch {
    pub teachers: Option<TeacherConnection>,
}

#[derive(Debug, Deserialize)]
pub struct TeacherConnection {
    #[serde(default)]
    pub edges: Vec<TeacherEdge>,
}

#[derive(Debug, Deserialize)]
pub struct TeacherEdge {
    pub node: Option<TeacherCandidate>,
}

impl SearchResponse {
    /// Extract the candidate nodes, or `None` when the nested path is
    /// absent altogether.
    pub fn into_candidates(self) -> Option<Vec<TeacherCandidate>> {
        let edges = self.data?.new_search?.teachers?.edges;
        Some(edges.into_iter().filter_map(|edge| edge.node).collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_flattens_to_candidates() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "data": {
                "newSearch": {
                    "teachers": {
                        "edges": [
                            {"node": {"id": "t1", "firstName": "Cormac", "lastName": "Tantalo"}},
                            {"node": null},
                            {"node": {"id": "t2", "firstName": "Agnes", "lastName": "Varda"}},
                        ]
                    }
                }
            }
        }))
        .expect("valid response");

        let candidates = response.into_candidates().expect("path present");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, "t1");
        assert_eq!(candidates[1].id, "t2");
    }

    #[test]
    fn missing_data_branch_yields_none() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "errors": [{"message": "rate limited"}]
        }))
        .expect("valid response");

        assert_eq!(response.errors.len(), 1);
        assert!(response.into_candidates().is_none());
    }

    #[test]
    fn empty_edges_yield_empty_list_not_none() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "data": {"newSearch": {"teachers": {"edges": []}}}
        }))
        .expect("valid response");

        let candidates = response.into_candidates().expect("path present");
        assert!(candidates.is_empty());
    }
}

//! Handlers for instructor profile lookups.
//!
//! Two contracts: the combined profile (directory + best ratings match,
//! fetched concurrently) and the reduced directory-only lookup. Upstream
//! failures are absorbed by the cache layer into sentinel fields, so both
//! endpoints return 200 with displayable empty states rather than erroring
//! when an upstream is down.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the combined-profile endpoint.
#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    /// Display name as rendered on the catalog page (e.g. `"TANTALO,C"`).
    pub name: Option<String>,
    /// Ratings school scope override.
    pub school_id: Option<String>,
}

/// GET /api/v1/instructors/{id}/profile?name=..[&school_id=..]
///
/// Combined profile: directory record plus the best-matching ratings
/// candidate for the given display name.
pub async fn combined_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ProfileParams>,
) -> AppResult<impl IntoResponse> {
    let name = params
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("query parameter 'name' is required".to_string()))?;

    let school_id = params
        .school_id
        .as_deref()
        .or(Some(state.config.ratings_school_id.as_str()));

    let profile = state
        .aggregator
        .combined_profile(&id, name, school_id)
        .await;

    tracing::debug!(
        %id,
        name,
        directory_success = profile.directory_success,
        matched = profile.best_ratings_match.is_some(),
        "combined profile served",
    );

    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/instructors/{id}/directory
///
/// Reduced contract: directory data only, no ratings call.
pub async fn directory_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let result = state.aggregator.directory_profile(&id).await;

    tracing::debug!(%id, success = result.success, "directory profile served");

    Ok(Json(DataResponse { data: result }))
}

//! Route table assembly.

pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::instructors;
use crate::state::AppState;

/// Routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/instructors/{id}/profile",
            get(instructors::combined_profile),
        )
        .route(
            "/instructors/{id}/directory",
            get(instructors::directory_profile),
        )
}

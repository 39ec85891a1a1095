use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /profiles            -> list profiles
/// PUT /profiles/{id}/role  -> change role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(profiles::list_profiles))
        .route("/profiles/{id}/role", put(profiles::update_role))
}

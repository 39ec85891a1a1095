use axum::routing::{get, post};
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET, POST  /                -> list, create
/// GET, PUT   /{id}            -> get, update
/// GET, POST  /{id}/versions   -> list versions, create draft
/// POST       /{id}/topics     -> create topic in the active version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route("/{id}", get(courses::get_course).put(courses::update_course))
        .route(
            "/{id}/versions",
            get(courses::list_versions).post(courses::create_draft),
        )
        .route("/{id}/topics", post(courses::create_topic))
}

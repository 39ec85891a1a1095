pub mod admin;
pub mod auth;
pub mod content;
pub mod courses;
pub mod health;
pub mod topics;
pub mod uploads;
pub mod versions;

use axum::routing::get;
use axum::Router;

use crate::handlers::assignments;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register, /auth/login, /auth/me
/// /admin/profiles, /admin/profiles/{id}/role
/// /courses/...                       see routes::courses
/// /versions/...                      see routes::versions
/// /topics/...                        see routes::topics
/// /resources, /modules, /lessons,
/// /comments                          see routes::content
/// /uploads                           multipart upload
/// /me/assignments                    caller's teacher assignments
/// ```
///
/// `/uploads` is nested by [`crate::router::build_app_router`] with its own
/// body limit.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/courses", courses::router())
        .nest("/versions", versions::router())
        .nest("/topics", topics::router())
        .route("/me/assignments", get(assignments::list_mine))
        .merge(content::router())
}

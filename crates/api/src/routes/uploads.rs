use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`, with their own body limit.
///
/// ```text
/// POST / -> multipart upload
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

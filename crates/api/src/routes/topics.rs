use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{comments, progress, topics};
use crate::state::AppState;

/// Routes mounted at `/topics`.
///
/// ```text
/// PUT, DELETE   /{id}            -> update, delete
/// POST          /{id}/resources  -> create resource
/// POST, DELETE  /{id}/complete   -> mark complete, mark incomplete
/// GET, POST     /{id}/comments   -> list, create comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(topics::update_topic).delete(topics::delete_topic))
        .route("/{id}/resources", post(topics::create_resource))
        .route(
            "/{id}/complete",
            post(progress::mark_complete).delete(progress::mark_incomplete),
        )
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}

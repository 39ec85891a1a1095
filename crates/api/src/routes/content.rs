//! Routes addressed by their own id: resources, modules, lessons, comments.

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::{comments, modules, resources};
use crate::state::AppState;

/// ```text
/// PUT, DELETE  /resources/{id}            -> update, delete resource
/// DELETE       /modules/{id}              -> delete module
/// POST         /modules/{id}/lessons      -> create lesson
/// DELETE       /lessons/{id}              -> delete lesson
/// PUT          /comments/{id}             -> edit comment
/// POST         /comments/{id}/responses   -> reply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/resources/{id}",
            put(resources::update_resource).delete(resources::delete_resource),
        )
        .route("/modules/{id}", delete(modules::delete_module))
        .route("/modules/{id}/lessons", post(modules::create_lesson))
        .route("/lessons/{id}", delete(modules::delete_lesson))
        .route("/comments/{id}", put(comments::update_comment))
        .route("/comments/{id}/responses", post(comments::respond))
}

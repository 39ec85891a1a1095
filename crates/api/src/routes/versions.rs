use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{assignments, progress, versions};
use crate::state::AppState;

/// Routes mounted at `/versions`.
///
/// ```text
/// GET         /{id}/content                   -> content tree
/// POST        /{id}/publish                   -> publish (admin)
/// POST        /{id}/archive                   -> archive (admin)
/// POST        /{id}/topics                    -> create topic
/// POST        /{id}/modules                   -> create module
/// GET, POST   /{id}/assignments               -> list, assign (admin)
/// DELETE      /{id}/assignments/{teacher_id}  -> unassign (admin)
/// GET         /{id}/progress                  -> caller's progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/content", get(versions::get_content))
        .route("/{id}/publish", post(versions::publish))
        .route("/{id}/archive", post(versions::archive))
        .route("/{id}/topics", post(versions::create_topic))
        .route("/{id}/modules", post(versions::create_module))
        .route(
            "/{id}/assignments",
            get(assignments::list_for_version).post(assignments::assign),
        )
        .route(
            "/{id}/assignments/{teacher_id}",
            delete(assignments::unassign),
        )
        .route("/{id}/progress", get(progress::get_progress))
}

//! Handlers for the caller's own progress.

use aula_core::types::DbId;
use aula_db::models::progress::StudentProgress;
use aula_usecases::progress::{
    CourseProgress, GetCourseProgressUseCase, MarkTopicCompleteUseCase,
    MarkTopicIncompleteUseCase,
};
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::middleware::auth::AuthUser;
use crate::response::{ok, DataResponse};
use crate::state::AppState;

/// POST /api/v1/topics/{id}/complete
///
/// Idempotent.
pub async fn mark_complete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<StudentProgress>>> {
    let record = MarkTopicCompleteUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(record))
}

/// DELETE /api/v1/topics/{id}/complete
pub async fn mark_incomplete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<StudentProgress>>> {
    let record = MarkTopicIncompleteUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(record))
}

/// GET /api/v1/versions/{id}/progress
pub async fn get_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<CourseProgress>>> {
    let progress = GetCourseProgressUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(progress))
}

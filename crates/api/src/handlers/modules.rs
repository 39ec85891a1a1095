//! Handlers for the `/modules` and `/lessons` resources.

use aula_core::types::DbId;
use aula_db::models::course_module::Lesson;
use aula_usecases::modules::{
    CreateLessonInput, CreateLessonUseCase, DeleteLessonUseCase, DeleteModuleUseCase,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// DELETE /api/v1/modules/{id}
pub async fn delete_module(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    DeleteModuleUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/modules/{id}/lessons
pub async fn create_lesson(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateLessonInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Lesson>>)> {
    let lesson = CreateLessonUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(created(lesson))
}

/// DELETE /api/v1/lessons/{id}
pub async fn delete_lesson(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    DeleteLessonUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

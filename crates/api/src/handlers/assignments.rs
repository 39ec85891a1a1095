//! Handlers for teacher assignments.

use aula_core::types::DbId;
use aula_db::models::assignment::TeacherAssignment;
use aula_usecases::assignments::{
    AssignTeacherUseCase, ListAssignmentsUseCase, ListMyAssignmentsUseCase,
    UnassignTeacherUseCase,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{created, ok, DataResponse};
use crate::state::AppState;

/// Request body for `POST /versions/{id}/assignments`.
#[derive(Debug, Deserialize)]
pub struct AssignTeacherRequest {
    pub teacher_id: DbId,
}

/// GET /api/v1/versions/{id}/assignments
pub async fn list_for_version(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(version_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<TeacherAssignment>>>> {
    let assignments = ListAssignmentsUseCase::new(state.store.as_ref())
        .execute(auth.user_id, version_id)
        .await?;
    Ok(ok(assignments))
}

/// POST /api/v1/versions/{id}/assignments
pub async fn assign(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(version_id): AppPath<DbId>,
    AppJson(input): AppJson<AssignTeacherRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TeacherAssignment>>)> {
    let assignment = AssignTeacherUseCase::new(state.store.as_ref())
        .execute(auth.user_id, version_id, input.teacher_id)
        .await?;
    Ok(created(assignment))
}

/// DELETE /api/v1/versions/{id}/assignments/{teacher_id}
pub async fn unassign(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath((version_id, teacher_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    UnassignTeacherUseCase::new(state.store.as_ref())
        .execute(auth.user_id, version_id, teacher_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/me/assignments
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<TeacherAssignment>>>> {
    let assignments = ListMyAssignmentsUseCase::new(state.store.as_ref())
        .execute(auth.user_id)
        .await?;
    Ok(ok(assignments))
}

//! Handlers for topic comment threads.

use aula_core::types::DbId;
use aula_db::models::comment::TopicComment;
use aula_usecases::comments::{
    CommentInput, CreateCommentUseCase, ListCommentsUseCase, RespondToCommentUseCase,
    UpdateCommentUseCase,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{created, ok, DataResponse};
use crate::state::AppState;

/// GET /api/v1/topics/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(topic_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<TopicComment>>>> {
    let comments = ListCommentsUseCase::new(state.store.as_ref())
        .execute(auth.user_id, topic_id)
        .await?;
    Ok(ok(comments))
}

/// POST /api/v1/topics/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(topic_id): AppPath<DbId>,
    AppJson(input): AppJson<CommentInput>,
) -> AppResult<(StatusCode, Json<DataResponse<TopicComment>>)> {
    let comment = CreateCommentUseCase::new(state.store.as_ref())
        .execute(auth.user_id, topic_id, input)
        .await?;
    Ok(created(comment))
}

/// PUT /api/v1/comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CommentInput>,
) -> AppResult<Json<DataResponse<TopicComment>>> {
    let comment = UpdateCommentUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(ok(comment))
}

/// POST /api/v1/comments/{id}/responses
pub async fn respond(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CommentInput>,
) -> AppResult<(StatusCode, Json<DataResponse<TopicComment>>)> {
    let reply = RespondToCommentUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(created(reply))
}

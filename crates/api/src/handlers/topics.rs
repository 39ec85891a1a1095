//! Handlers for the `/topics` resource.

use aula_core::types::DbId;
use aula_db::models::resource::Resource;
use aula_db::models::topic::{Topic, UpdateTopic};
use aula_usecases::resources::{CreateResourceInput, CreateResourceUseCase};
use aula_usecases::topics::{DeleteTopicUseCase, UpdateTopicUseCase};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{created, ok, DataResponse};
use crate::state::AppState;

/// PUT /api/v1/topics/{id}
pub async fn update_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTopic>,
) -> AppResult<Json<DataResponse<Topic>>> {
    let topic = UpdateTopicUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(ok(topic))
}

/// DELETE /api/v1/topics/{id}
///
/// Removes the topic with its resources, progress and comments.
pub async fn delete_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    DeleteTopicUseCase::new(state.store.as_ref(), state.storage.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/topics/{id}/resources
pub async fn create_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateResourceInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Resource>>)> {
    let resource = CreateResourceUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(created(resource))
}

//! Handlers for the `/resources` resource.

use aula_core::types::DbId;
use aula_db::models::resource::{Resource, UpdateResource};
use aula_usecases::resources::{DeleteResourceUseCase, UpdateResourceUseCase};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{ok, DataResponse};
use crate::state::AppState;

/// PUT /api/v1/resources/{id}
pub async fn update_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateResource>,
) -> AppResult<Json<DataResponse<Resource>>> {
    let resource = UpdateResourceUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(ok(resource))
}

/// DELETE /api/v1/resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    DeleteResourceUseCase::new(state.store.as_ref(), state.storage.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

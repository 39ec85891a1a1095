//! Admin user management.

use aula_core::types::DbId;
use aula_db::models::profile::Profile;
use aula_usecases::profiles::{ListProfilesUseCase, UpdateProfileRoleUseCase};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{ok, DataResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// GET /api/v1/admin/profiles
pub async fn list_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Profile>>>> {
    let profiles = ListProfilesUseCase::new(state.store.as_ref())
        .execute(auth.user_id)
        .await?;
    Ok(ok(profiles))
}

/// PUT /api/v1/admin/profiles/{id}/role
pub async fn update_role(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRoleRequest>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = UpdateProfileRoleUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, &input.role)
        .await?;
    Ok(ok(profile))
}

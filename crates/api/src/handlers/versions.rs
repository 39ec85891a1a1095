//! Handlers for the `/versions` resource: content tree, lifecycle, and
//! content created directly under a version.

use aula_core::types::DbId;
use aula_db::models::content::VersionContent;
use aula_db::models::course_module::CourseModule;
use aula_db::models::course_version::CourseVersion;
use aula_db::models::topic::Topic;
use aula_usecases::courses::GetVersionContentUseCase;
use aula_usecases::modules::{CreateModuleInput, CreateModuleUseCase};
use aula_usecases::topics::{CreateTopicInput, CreateTopicUseCase, TopicTarget};
use aula_usecases::versions::{ArchiveVersionUseCase, PublishVersionUseCase};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{created, ok, DataResponse};
use crate::state::AppState;

/// GET /api/v1/versions/{id}/content
pub async fn get_content(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<VersionContent>>> {
    let content = GetVersionContentUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(content))
}

/// POST /api/v1/versions/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<CourseVersion>>> {
    let version = PublishVersionUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(version))
}

/// POST /api/v1/versions/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<CourseVersion>>> {
    let version = ArchiveVersionUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(version))
}

/// POST /api/v1/versions/{id}/topics
pub async fn create_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateTopicInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Topic>>)> {
    let topic = CreateTopicUseCase::new(state.store.as_ref())
        .execute(auth.user_id, TopicTarget::Version(id), input)
        .await?;
    Ok(created(topic))
}

/// POST /api/v1/versions/{id}/modules
pub async fn create_module(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateModuleInput>,
) -> AppResult<(StatusCode, Json<DataResponse<CourseModule>>)> {
    let module = CreateModuleUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(created(module))
}

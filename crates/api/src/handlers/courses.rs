//! Handlers for the `/courses` resource.

use aula_core::types::DbId;
use aula_db::models::course::{Course, CourseWithVersion, UpdateCourse};
use aula_db::models::course_version::CourseVersion;
use aula_db::models::topic::Topic;
use aula_usecases::courses::{
    CreateCourseInput, CreateCourseUseCase, GetCourseUseCase, ListCoursesUseCase,
    ListVersionsUseCase, UpdateCourseUseCase,
};
use aula_usecases::topics::{CreateTopicInput, CreateTopicUseCase, TopicTarget};
use aula_usecases::versions::{CreateDraftInput, CreateDraftUseCase};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::{created, ok, DataResponse};
use crate::state::AppState;

/// GET /api/v1/courses
///
/// Staff see every course; students only those with a published, visible
/// active version.
pub async fn list_courses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CourseWithVersion>>>> {
    let courses = ListCoursesUseCase::new(state.store.as_ref())
        .execute(auth.user_id)
        .await?;
    Ok(ok(courses))
}

/// POST /api/v1/courses
pub async fn create_course(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateCourseInput>,
) -> AppResult<(StatusCode, Json<DataResponse<CourseWithVersion>>)> {
    let course = CreateCourseUseCase::new(state.store.as_ref())
        .execute(auth.user_id, input)
        .await?;
    Ok(created(course))
}

/// GET /api/v1/courses/{id}
pub async fn get_course(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<CourseWithVersion>>> {
    let course = GetCourseUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(course))
}

/// PUT /api/v1/courses/{id}
pub async fn update_course(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCourse>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = UpdateCourseUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(ok(course))
}

/// GET /api/v1/courses/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<CourseVersion>>>> {
    let versions = ListVersionsUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id)
        .await?;
    Ok(ok(versions))
}

/// POST /api/v1/courses/{id}/versions
pub async fn create_draft(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateDraftInput>,
) -> AppResult<(StatusCode, Json<DataResponse<CourseVersion>>)> {
    let version = CreateDraftUseCase::new(state.store.as_ref())
        .execute(auth.user_id, id, input)
        .await?;
    Ok(created(version))
}

/// POST /api/v1/courses/{id}/topics
///
/// Creates the topic in the course's active version.
pub async fn create_topic(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateTopicInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Topic>>)> {
    let topic = CreateTopicUseCase::new(state.store.as_ref())
        .execute(auth.user_id, TopicTarget::Course(id), input)
        .await?;
    Ok(created(topic))
}

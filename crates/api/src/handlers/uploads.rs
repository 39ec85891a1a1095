//! Multipart file upload.

use aula_core::types::DbId;
use aula_db::models::resource::Resource;
use aula_usecases::uploads::{UploadFileInput, UploadFileUseCase};
use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{created, DataResponse};
use crate::state::AppState;

const FALLBACK_FILE_NAME: &str = "archivo";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// The `file` part of the form.
struct FilePart {
    file_name: String,
    content_type: String,
    content: Vec<u8>,
}

/// POST /api/v1/uploads
///
/// Multipart fields: `file` (required), `courseId`, `topicId`,
/// `resourceType` (`document|video|audio|image`), and optional `title`.
/// Unknown fields are ignored.
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Resource>>)> {
    let mut multipart = multipart?;
    let mut file: Option<FilePart> = None;
    let mut course_id: Option<DbId> = None;
    let mut topic_id: Option<DbId> = None;
    let mut resource_type: Option<String> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or(FALLBACK_FILE_NAME).to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_string();
                let content = field.bytes().await?;
                file = Some(FilePart {
                    file_name,
                    content_type,
                    content: content.to_vec(),
                });
            }
            "courseId" => course_id = Some(id_field(field, "courseId").await?),
            "topicId" => topic_id = Some(id_field(field, "topicId").await?),
            "resourceType" => resource_type = Some(text_field(field).await?),
            "title" => title = Some(text_field(field).await?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| missing("file"))?;
    let input = UploadFileInput {
        course_id: course_id.ok_or_else(|| missing("courseId"))?,
        topic_id: topic_id.ok_or_else(|| missing("topicId"))?,
        resource_type: resource_type.ok_or_else(|| missing("resourceType"))?,
        file_name: file.file_name,
        content_type: file.content_type,
        content: file.content,
        title,
    };

    let resource = UploadFileUseCase::new(state.store.as_ref(), state.storage.as_ref())
        .execute(auth.user_id, input)
        .await?;
    Ok(created(resource))
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("Falta el campo obligatorio '{field}'"))
}

async fn text_field(field: Field<'_>) -> AppResult<String> {
    let text = field.text().await?;
    Ok(text.trim().to_string())
}

async fn id_field(field: Field<'_>, name: &str) -> AppResult<DbId> {
    let raw = text_field(field).await?;
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("El campo '{name}' debe ser un identificador numérico")))
}

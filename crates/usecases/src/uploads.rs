//! File upload: validate, store the object, and create a `file` resource
//! pointing at it.

use aula_core::content::{self, KIND_FILE};
use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::storage::ObjectStorage;
use aula_core::types::DbId;
use aula_core::uploads::{self, UploadCategory};
use aula_db::models::resource::{CreateResource, Resource};
use aula_db::ContentStore;

use crate::context::{authenticate, authorize_content_write, load_topic_with_version};
use crate::error::unexpected;

/// A file received from the client.
#[derive(Debug, Clone)]
pub struct UploadFileInput {
    pub course_id: DbId,
    pub topic_id: DbId,
    /// `document`, `video`, `audio` or `image`.
    pub resource_type: String,
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
    /// Resource title; defaults to the file name.
    pub title: Option<String>,
}

pub struct UploadFileUseCase<'a> {
    store: &'a dyn ContentStore,
    storage: &'a dyn ObjectStorage,
}

impl<'a> UploadFileUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore, storage: &'a dyn ObjectStorage) -> Self {
        Self { store, storage }
    }

    pub async fn execute(&self, actor_id: DbId, input: UploadFileInput) -> Result<Resource, CoreError> {
        let (topic, version) = load_topic_with_version(self.store, input.topic_id).await?;
        if version.course_id != input.course_id {
            return Err(CoreError::Validation(messages::TOPIC_NOT_IN_COURSE.to_string()));
        }
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        let category = UploadCategory::from_name(&input.resource_type)?;
        let size = input.content.len() as u64;
        let validated = uploads::validate_upload(category, &input.content_type, size)?;

        let title = input
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(input.file_name.as_str())
            .to_string();
        content::validate_title(&title)?;

        let key = uploads::new_storage_key(input.course_id, topic.id, &input.file_name, &validated);
        self.storage
            .put_object(&key, input.content, &validated.mime_type)
            .await
            .map_err(|e| unexpected(format!("{}: {e}", messages::STORAGE_UPLOAD_FAILED)))?;
        let file_url = self.storage.public_url(&key);

        let created = self
            .store
            .create_resource(&CreateResource {
                topic_id: topic.id,
                title,
                kind: KIND_FILE.to_string(),
                file_url: Some(file_url),
                file_name: Some(input.file_name),
                file_size: Some(size as i64),
                mime_type: Some(validated.mime_type),
                external_url: None,
                order_index: None,
            })
            .await;

        let resource = match created {
            Ok(resource) => resource,
            Err(e) => {
                // Do not leave the object behind when the record is missing.
                if let Err(cleanup) = self.storage.delete_object(&key).await {
                    tracing::warn!(key = %key, error = %cleanup, "Failed to remove orphaned upload");
                }
                return Err(unexpected(e));
            }
        };

        tracing::info!(
            resource_id = resource.id,
            topic_id = topic.id,
            key = %key,
            size_bytes = size,
            user_id = actor.id(),
            "File uploaded",
        );
        Ok(resource)
    }
}

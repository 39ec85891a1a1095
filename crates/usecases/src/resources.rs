//! Resource use-cases.
//!
//! Deleting a file resource removes the stored object first. A storage
//! failure is logged and ignored: an orphaned object is preferable to an
//! orphaned record.

use aula_core::content::{self, ResourceKind};
use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::storage::ObjectStorage;
use aula_core::types::DbId;
use aula_db::models::resource::{CreateResource, Resource, UpdateResource};
use aula_db::ContentStore;
use serde::Deserialize;

use crate::context::{authenticate, authorize_content_write, load_topic_with_version};
use crate::error::StoreResultExt;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateResourceInput {
    pub title: String,
    pub kind: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub external_url: Option<String>,
    pub order_index: Option<i32>,
}

/// Delete the stored object behind `file_url`, logging and swallowing any
/// failure. URLs that do not belong to `storage` are left alone.
pub(crate) async fn release_file(storage: &dyn ObjectStorage, file_url: &str) {
    let Some(key) = storage.key_from_url(file_url) else {
        tracing::warn!(file_url, "File URL is not managed by storage; skipping delete");
        return;
    };
    if let Err(e) = storage.delete_object(&key).await {
        tracing::warn!(key = %key, error = %e, "Failed to delete stored file");
    }
}

async fn load_resource(store: &dyn ContentStore, id: DbId) -> Result<Resource, CoreError> {
    store
        .find_resource(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound {
            entity: "Recurso",
            id,
        })
}

// ---------------------------------------------------------------------------
// CreateResource
// ---------------------------------------------------------------------------

pub struct CreateResourceUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateResourceUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        topic_id: DbId,
        input: CreateResourceInput,
    ) -> Result<Resource, CoreError> {
        let (topic, version) = load_topic_with_version(self.store, topic_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        content::validate_title(&input.title)?;
        content::validate_order_index(input.order_index)?;
        let kind = ResourceKind::from_name(&input.kind)?;
        content::validate_resource_target(
            kind,
            input.file_url.as_deref(),
            input.external_url.as_deref(),
        )?;

        let create = match kind {
            ResourceKind::File => CreateResource {
                topic_id: topic.id,
                title: input.title.trim().to_string(),
                kind: kind.as_str().to_string(),
                file_url: input.file_url,
                file_name: input.file_name,
                file_size: input.file_size,
                mime_type: input.mime_type,
                external_url: None,
                order_index: input.order_index,
            },
            ResourceKind::Link => CreateResource {
                topic_id: topic.id,
                title: input.title.trim().to_string(),
                kind: kind.as_str().to_string(),
                file_url: None,
                file_name: None,
                file_size: None,
                mime_type: None,
                external_url: input.external_url.map(|u| u.trim().to_string()),
                order_index: input.order_index,
            },
        };
        let resource = self.store.create_resource(&create).await.or_unexpected()?;

        tracing::info!(
            resource_id = resource.id,
            topic_id,
            kind = %resource.kind,
            user_id = actor.id(),
            "Resource created",
        );
        Ok(resource)
    }
}

// ---------------------------------------------------------------------------
// UpdateResource
// ---------------------------------------------------------------------------

pub struct UpdateResourceUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UpdateResourceUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        resource_id: DbId,
        input: UpdateResource,
    ) -> Result<Resource, CoreError> {
        let resource = load_resource(self.store, resource_id).await?;
        let (_, version) = load_topic_with_version(self.store, resource.topic_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        if let Some(title) = &input.title {
            content::validate_title(title)?;
        }
        content::validate_order_index(input.order_index)?;
        if let Some(url) = &input.external_url {
            if ResourceKind::from_name(&resource.kind)? != ResourceKind::Link {
                return Err(CoreError::Validation(
                    messages::EXTERNAL_URL_ON_FILE.to_string(),
                ));
            }
            content::validate_external_url(url)?;
        }

        let updated = self
            .store
            .update_resource(resource_id, &input)
            .await
            .or_unexpected()?
            .ok_or(CoreError::NotFound {
                entity: "Recurso",
                id: resource_id,
            })?;

        tracing::info!(resource_id, user_id = actor.id(), "Resource updated");
        Ok(updated)
    }
}

// ---------------------------------------------------------------------------
// DeleteResource
// ---------------------------------------------------------------------------

pub struct DeleteResourceUseCase<'a> {
    store: &'a dyn ContentStore,
    storage: &'a dyn ObjectStorage,
}

impl<'a> DeleteResourceUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore, storage: &'a dyn ObjectStorage) -> Self {
        Self { store, storage }
    }

    pub async fn execute(&self, actor_id: DbId, resource_id: DbId) -> Result<(), CoreError> {
        let resource = load_resource(self.store, resource_id).await?;
        let (_, version) = load_topic_with_version(self.store, resource.topic_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        if let Some(url) = &resource.file_url {
            // Drafts copied from another version share files with it.
            let references = self
                .store
                .count_resources_with_file_url(url)
                .await
                .or_unexpected()?;
            if references <= 1 {
                release_file(self.storage, url).await;
            }
        }

        let deleted = self.store.delete_resource(resource_id).await.or_unexpected()?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Recurso",
                id: resource_id,
            });
        }

        tracing::info!(
            resource_id,
            version_id = version.id,
            user_id = actor.id(),
            "Resource deleted",
        );
        Ok(())
    }
}

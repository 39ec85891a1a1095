//! Topic use-cases.

use aula_core::content;
use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::storage::ObjectStorage;
use aula_core::types::DbId;
use aula_db::models::topic::{CreateTopic, Topic, UpdateTopic};
use aula_db::ContentStore;
use serde::Deserialize;

use crate::context::{authenticate, authorize_content_write, load_course, load_topic_with_version, load_version};
use crate::error::StoreResultExt;
use crate::resources::release_file;

// ---------------------------------------------------------------------------
// CreateTopic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopicInput {
    pub title: String,
    pub description: Option<String>,
    pub order_index: Option<i32>,
}

/// Where a new topic goes: an explicit version, or a course's active version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicTarget {
    Version(DbId),
    Course(DbId),
}

pub struct CreateTopicUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateTopicUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        target: TopicTarget,
        input: CreateTopicInput,
    ) -> Result<Topic, CoreError> {
        let version_id = match target {
            TopicTarget::Version(id) => id,
            TopicTarget::Course(course_id) => load_course(self.store, course_id)
                .await?
                .active_version_id
                .ok_or_else(|| CoreError::Validation(messages::NO_ACTIVE_VERSION.to_string()))?,
        };
        let version = load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        content::validate_title(&input.title)?;
        content::validate_order_index(input.order_index)?;
        let topic = self
            .store
            .create_topic(&CreateTopic {
                course_version_id: version.id,
                title: input.title.trim().to_string(),
                description: input.description,
                order_index: input.order_index,
            })
            .await
            .or_unexpected()?;

        tracing::info!(
            topic_id = topic.id,
            version_id = version.id,
            user_id = actor.id(),
            "Topic created",
        );
        Ok(topic)
    }
}

// ---------------------------------------------------------------------------
// UpdateTopic
// ---------------------------------------------------------------------------

pub struct UpdateTopicUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UpdateTopicUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        topic_id: DbId,
        input: UpdateTopic,
    ) -> Result<Topic, CoreError> {
        let (_, version) = load_topic_with_version(self.store, topic_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        if let Some(title) = &input.title {
            content::validate_title(title)?;
        }
        content::validate_order_index(input.order_index)?;

        let topic = self
            .store
            .update_topic(topic_id, &input)
            .await
            .or_unexpected()?
            .ok_or(CoreError::NotFound {
                entity: "Tema",
                id: topic_id,
            })?;

        tracing::info!(topic_id, user_id = actor.id(), "Topic updated");
        Ok(topic)
    }
}

// ---------------------------------------------------------------------------
// DeleteTopic
// ---------------------------------------------------------------------------

pub struct DeleteTopicUseCase<'a> {
    store: &'a dyn ContentStore,
    storage: &'a dyn ObjectStorage,
}

impl<'a> DeleteTopicUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore, storage: &'a dyn ObjectStorage) -> Self {
        Self { store, storage }
    }

    /// Delete a topic with its resources, progress and comments. Files no
    /// other resource references are removed from storage afterwards.
    pub async fn execute(&self, actor_id: DbId, topic_id: DbId) -> Result<(), CoreError> {
        let (_, version) = load_topic_with_version(self.store, topic_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        let file_urls: Vec<String> = self
            .store
            .list_resources_for_version(version.id)
            .await
            .or_unexpected()?
            .into_iter()
            .filter(|r| r.topic_id == topic_id)
            .filter_map(|r| r.file_url)
            .collect();

        let deleted = self.store.delete_topic(topic_id).await.or_unexpected()?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: "Tema",
                id: topic_id,
            });
        }

        // The topic is gone; a failed lookup only leaves a file behind.
        for url in &file_urls {
            match self.store.count_resources_with_file_url(url).await {
                Ok(0) => release_file(self.storage, url).await,
                Ok(_) => {}
                Err(e) => tracing::warn!(
                    file_url = %url,
                    error = %e,
                    "Could not count file references; keeping file"
                ),
            }
        }

        tracing::info!(
            topic_id,
            files = file_urls.len(),
            user_id = actor.id(),
            "Topic deleted",
        );
        Ok(())
    }
}

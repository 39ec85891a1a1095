//! Topic comment threads.

use aula_core::content;
use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::types::DbId;
use aula_db::models::comment::{CreateComment, TopicComment};
use aula_db::ContentStore;
use serde::Deserialize;

use crate::context::{authenticate, ensure_readable, load_course, load_topic_with_version, Actor};
use crate::error::StoreResultExt;

#[derive(Debug, Clone, Deserialize)]
pub struct CommentInput {
    pub body: String,
}

async fn load_comment(store: &dyn ContentStore, id: DbId) -> Result<TopicComment, CoreError> {
    store
        .find_comment(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound {
            entity: "Comentario",
            id,
        })
}

/// Authenticate the caller and require read access to `topic_id`.
async fn reader_of_topic(
    store: &dyn ContentStore,
    actor_id: DbId,
    topic_id: DbId,
) -> Result<Actor, CoreError> {
    let (_, version) = load_topic_with_version(store, topic_id).await?;
    let course = load_course(store, version.course_id).await?;
    let actor = authenticate(store, actor_id).await?;
    ensure_readable(&actor, &course, &version)?;
    Ok(actor)
}

async fn insert_comment(
    store: &dyn ContentStore,
    actor: &Actor,
    topic_id: DbId,
    parent_id: Option<DbId>,
    body: &str,
) -> Result<TopicComment, CoreError> {
    content::validate_comment_body(body)?;
    let comment = store
        .create_comment(&CreateComment {
            topic_id,
            author_id: actor.id(),
            parent_id,
            body: body.trim().to_string(),
        })
        .await
        .or_unexpected()?;
    tracing::info!(
        comment_id = comment.id,
        topic_id,
        parent_id = ?parent_id,
        user_id = actor.id(),
        "Comment created",
    );
    Ok(comment)
}

pub struct CreateCommentUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateCommentUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        topic_id: DbId,
        input: CommentInput,
    ) -> Result<TopicComment, CoreError> {
        let actor = reader_of_topic(self.store, actor_id, topic_id).await?;
        insert_comment(self.store, &actor, topic_id, None, &input.body).await
    }
}

pub struct RespondToCommentUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> RespondToCommentUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Reply to `parent_id`. The reply lands on the parent's topic.
    pub async fn execute(
        &self,
        actor_id: DbId,
        parent_id: DbId,
        input: CommentInput,
    ) -> Result<TopicComment, CoreError> {
        let parent = load_comment(self.store, parent_id).await?;
        let actor = reader_of_topic(self.store, actor_id, parent.topic_id).await?;
        insert_comment(self.store, &actor, parent.topic_id, Some(parent.id), &input.body).await
    }
}

pub struct UpdateCommentUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UpdateCommentUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Edit a comment's body. Only its author may do so.
    pub async fn execute(
        &self,
        actor_id: DbId,
        comment_id: DbId,
        input: CommentInput,
    ) -> Result<TopicComment, CoreError> {
        let comment = load_comment(self.store, comment_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        if comment.author_id != actor.id() {
            return Err(CoreError::forbidden(messages::NOT_COMMENT_AUTHOR));
        }
        content::validate_comment_body(&input.body)?;

        let updated = self
            .store
            .update_comment(comment_id, input.body.trim())
            .await
            .or_unexpected()?
            .ok_or(CoreError::NotFound {
                entity: "Comentario",
                id: comment_id,
            })?;
        tracing::info!(comment_id, user_id = actor.id(), "Comment updated");
        Ok(updated)
    }
}

pub struct ListCommentsUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ListCommentsUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Comments of a topic in posting order; replies carry `parent_id`.
    pub async fn execute(
        &self,
        actor_id: DbId,
        topic_id: DbId,
    ) -> Result<Vec<TopicComment>, CoreError> {
        reader_of_topic(self.store, actor_id, topic_id).await?;
        self.store.list_comments(topic_id).await.or_unexpected()
    }
}

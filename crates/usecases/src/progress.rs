//! Student progress: mark topics complete or incomplete and report
//! completion per version.

use std::collections::HashSet;

use aula_core::content::completion_percentage;
use aula_core::error::CoreError;
use aula_core::types::DbId;
use aula_db::models::progress::StudentProgress;
use aula_db::ContentStore;
use serde::Serialize;

use crate::context::{authenticate, ensure_readable, load_course, load_topic_with_version, load_version};
use crate::error::StoreResultExt;

/// The caller's completion state for one course version.
#[derive(Debug, Clone, Serialize)]
pub struct CourseProgress {
    pub course_version_id: DbId,
    pub total_topics: usize,
    pub completed_topic_ids: Vec<DbId>,
    pub percentage: u8,
}

pub struct SetTopicCompletionUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> SetTopicCompletionUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Upsert the caller's own record for `topic_id`. Idempotent: completing
    /// a topic twice keeps one record and the first `completed_at`.
    pub async fn execute(
        &self,
        actor_id: DbId,
        topic_id: DbId,
        completed: bool,
    ) -> Result<StudentProgress, CoreError> {
        let (topic, version) = load_topic_with_version(self.store, topic_id).await?;
        let course = load_course(self.store, version.course_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        ensure_readable(&actor, &course, &version)?;

        let record = self
            .store
            .upsert_progress(actor.id(), topic.id, completed)
            .await
            .or_unexpected()?;

        tracing::debug!(topic_id, user_id = actor.id(), completed, "Topic progress updated");
        Ok(record)
    }
}

/// Mark a topic complete.
pub struct MarkTopicCompleteUseCase<'a>(SetTopicCompletionUseCase<'a>);

impl<'a> MarkTopicCompleteUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self(SetTopicCompletionUseCase::new(store))
    }

    pub async fn execute(&self, actor_id: DbId, topic_id: DbId) -> Result<StudentProgress, CoreError> {
        self.0.execute(actor_id, topic_id, true).await
    }
}

/// Reset a topic to not completed.
pub struct MarkTopicIncompleteUseCase<'a>(SetTopicCompletionUseCase<'a>);

impl<'a> MarkTopicIncompleteUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self(SetTopicCompletionUseCase::new(store))
    }

    pub async fn execute(&self, actor_id: DbId, topic_id: DbId) -> Result<StudentProgress, CoreError> {
        self.0.execute(actor_id, topic_id, false).await
    }
}

pub struct GetCourseProgressUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> GetCourseProgressUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, actor_id: DbId, version_id: DbId) -> Result<CourseProgress, CoreError> {
        let version = load_version(self.store, version_id).await?;
        let course = load_course(self.store, version.course_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        ensure_readable(&actor, &course, &version)?;

        let topics = self.store.list_topics(version_id).await.or_unexpected()?;
        let done: HashSet<DbId> = self
            .store
            .list_progress_for_version(actor.id(), version_id)
            .await
            .or_unexpected()?
            .into_iter()
            .filter(|p| p.completed)
            .map(|p| p.topic_id)
            .collect();

        let completed_topic_ids: Vec<DbId> = topics
            .iter()
            .map(|t| t.id)
            .filter(|id| done.contains(id))
            .collect();

        Ok(CourseProgress {
            course_version_id: version_id,
            total_topics: topics.len(),
            percentage: completion_percentage(completed_topic_ids.len(), topics.len()),
            completed_topic_ids,
        })
    }
}

//! Course version workflow: open a draft, publish it, archive it.

use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::permissions::{self, Action};
use aula_core::roles::Role;
use aula_core::types::DbId;
use aula_core::versioning::{self, Transition};
use aula_db::models::course_version::{CourseVersion, CreateDraftVersion};
use aula_db::ContentStore;
use serde::Deserialize;

use crate::context::{authenticate, authorize, load_course, load_version};
use crate::error::StoreResultExt;

// ---------------------------------------------------------------------------
// CreateDraft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDraftInput {
    pub version_label: String,
    /// Version to copy content from. Defaults to the course's active version.
    pub base_version_id: Option<DbId>,
}

pub struct CreateDraftUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateDraftUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Open a new draft of `course_id`.
    ///
    /// Teachers must be assigned to the base version and are assigned to the
    /// new draft automatically.
    pub async fn execute(
        &self,
        actor_id: DbId,
        course_id: DbId,
        input: CreateDraftInput,
    ) -> Result<CourseVersion, CoreError> {
        let course = load_course(self.store, course_id).await?;
        let base_version_id = input.base_version_id.or(course.active_version_id);
        if let Some(base_id) = base_version_id {
            let base = load_version(self.store, base_id).await?;
            if base.course_id != course.id {
                return Err(CoreError::Validation(
                    messages::VERSION_NOT_IN_COURSE.to_string(),
                ));
            }
        }

        let actor = authenticate(self.store, actor_id).await?;
        match base_version_id {
            Some(base_id) => authorize(self.store, &actor, Action::CreateDraft, base_id).await?,
            // Without a base there is no assignment a teacher could hold.
            None => permissions::evaluate(actor.role, Action::CreateDraft, false).into_result()?,
        }

        let label = input.version_label.trim();
        versioning::validate_version_label(label)?;

        let draft = self
            .store
            .create_draft(&CreateDraftVersion {
                course_id: course.id,
                version_label: label.to_string(),
                created_by: actor.id(),
                base_version_id,
                assign_teacher: (actor.role == Role::Teacher).then(|| actor.id()),
            })
            .await
            .or_conflict(messages::VERSION_LABEL_TAKEN)?;

        tracing::info!(
            course_id,
            version_id = draft.id,
            base_version_id = ?base_version_id,
            user_id = actor.id(),
            "Draft version created",
        );
        Ok(draft)
    }
}

// ---------------------------------------------------------------------------
// PublishVersion
// ---------------------------------------------------------------------------

pub struct PublishVersionUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> PublishVersionUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Publish a draft, archiving the course's previously published version.
    pub async fn execute(&self, actor_id: DbId, version_id: DbId) -> Result<CourseVersion, CoreError> {
        let version = load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize(self.store, &actor, Action::PublishVersion, version_id).await?;
        versioning::apply_transition(version.status()?, Transition::Publish)?;

        // `None` means another request moved the version out of draft first.
        let published = self
            .store
            .publish_version(version_id)
            .await
            .or_conflict(messages::ONLY_DRAFT_PUBLISHABLE)?
            .ok_or_else(|| CoreError::conflict(messages::ONLY_DRAFT_PUBLISHABLE))?;

        tracing::info!(
            course_id = published.course_id,
            version_id,
            user_id = actor.id(),
            "Version published",
        );
        Ok(published)
    }
}

// ---------------------------------------------------------------------------
// ArchiveVersion
// ---------------------------------------------------------------------------

pub struct ArchiveVersionUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ArchiveVersionUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, actor_id: DbId, version_id: DbId) -> Result<CourseVersion, CoreError> {
        let version = load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize(self.store, &actor, Action::ArchiveVersion, version_id).await?;
        versioning::apply_transition(version.status()?, Transition::Archive)?;

        let archived = self
            .store
            .archive_version(version_id)
            .await
            .or_unexpected()?
            .ok_or_else(|| CoreError::conflict(messages::ONLY_PUBLISHED_ARCHIVABLE))?;

        tracing::info!(
            course_id = archived.course_id,
            version_id,
            user_id = actor.id(),
            "Version archived",
        );
        Ok(archived)
    }
}

//! Shared steps of the use-case template: authentication, loading, and
//! authorization against a course version.

use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::permissions::{self, Action};
use aula_core::roles::Role;
use aula_core::types::DbId;
use aula_core::versioning;
use aula_db::models::course::Course;
use aula_db::models::course_version::CourseVersion;
use aula_db::models::profile::Profile;
use aula_db::models::topic::Topic;
use aula_db::ContentStore;

use crate::error::StoreResultExt;

/// The authenticated caller, with their role resolved from the profile.
#[derive(Debug, Clone)]
pub struct Actor {
    pub profile: Profile,
    pub role: Role,
}

impl Actor {
    pub fn id(&self) -> DbId {
        self.profile.id
    }
}

/// Load the caller's profile. A missing profile means the caller is not
/// authenticated, whatever their token says.
pub async fn authenticate(store: &dyn ContentStore, actor_id: DbId) -> Result<Actor, CoreError> {
    let profile = store
        .find_profile(actor_id)
        .await
        .or_unexpected()?
        .ok_or_else(|| CoreError::Unauthorized(messages::NOT_AUTHENTICATED.to_string()))?;
    let role = profile.role()?;
    Ok(Actor { profile, role })
}

/// Check `action` on `version_id`, looking the teacher assignment up when the
/// policy needs it.
pub async fn authorize(
    store: &dyn ContentStore,
    actor: &Actor,
    action: Action,
    version_id: DbId,
) -> Result<(), CoreError> {
    let is_assigned = if permissions::requires_assignment(actor.role, action) {
        store
            .is_teacher_assigned(actor.id(), version_id)
            .await
            .or_unexpected()?
    } else {
        false
    };
    permissions::evaluate(actor.role, action, is_assigned).into_result()
}

/// Check an action that is not scoped to a version (course and user
/// management).
pub fn authorize_global(actor: &Actor, action: Action) -> Result<(), CoreError> {
    permissions::evaluate(actor.role, action, false).into_result()
}

/// Authorize a content write on `version` and require it to be a draft.
pub async fn authorize_content_write(
    store: &dyn ContentStore,
    actor: &Actor,
    version: &CourseVersion,
) -> Result<(), CoreError> {
    authorize(store, actor, Action::WriteContent, version.id).await?;
    versioning::ensure_editable(version.status()?)
}

/// Require read access to `version` of `course`.
pub fn ensure_readable(
    actor: &Actor,
    course: &Course,
    version: &CourseVersion,
) -> Result<(), CoreError> {
    permissions::can_read_version(actor.role, version.status()?, course.is_visible).into_result()
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

pub async fn load_course(store: &dyn ContentStore, id: DbId) -> Result<Course, CoreError> {
    store
        .find_course(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound {
            entity: "Curso",
            id,
        })
}

pub async fn load_version(store: &dyn ContentStore, id: DbId) -> Result<CourseVersion, CoreError> {
    store
        .find_version(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound {
            entity: "Versión",
            id,
        })
}

pub async fn load_topic(store: &dyn ContentStore, id: DbId) -> Result<Topic, CoreError> {
    store
        .find_topic(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound { entity: "Tema", id })
}

pub async fn load_profile(store: &dyn ContentStore, id: DbId) -> Result<Profile, CoreError> {
    store
        .find_profile(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound {
            entity: "Perfil",
            id,
        })
}

/// Load a topic together with the version it belongs to.
pub async fn load_topic_with_version(
    store: &dyn ContentStore,
    topic_id: DbId,
) -> Result<(Topic, CourseVersion), CoreError> {
    let topic = load_topic(store, topic_id).await?;
    let version = load_version(store, topic.course_version_id).await?;
    Ok((topic, version))
}

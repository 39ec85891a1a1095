//! Teacher assignment management.

use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::permissions::Action;
use aula_core::roles::Role;
use aula_core::types::DbId;
use aula_db::models::assignment::TeacherAssignment;
use aula_db::ContentStore;

use crate::context::{authenticate, authorize_global, load_profile, load_version};
use crate::error::StoreResultExt;

pub struct AssignTeacherUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> AssignTeacherUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        version_id: DbId,
        teacher_id: DbId,
    ) -> Result<TeacherAssignment, CoreError> {
        load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageAssignments)?;

        let teacher = load_profile(self.store, teacher_id).await?;
        if teacher.role()? != Role::Teacher {
            return Err(CoreError::Validation(messages::NOT_A_TEACHER.to_string()));
        }

        let assignment = self
            .store
            .assign_teacher(teacher_id, version_id, Some(actor.id()))
            .await
            .or_conflict(messages::ALREADY_ASSIGNED)?;

        tracing::info!(teacher_id, version_id, user_id = actor.id(), "Teacher assigned");
        Ok(assignment)
    }
}

pub struct UnassignTeacherUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UnassignTeacherUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        version_id: DbId,
        teacher_id: DbId,
    ) -> Result<(), CoreError> {
        load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageAssignments)?;

        let removed = self
            .store
            .unassign_teacher(teacher_id, version_id)
            .await
            .or_unexpected()?;
        if !removed {
            return Err(CoreError::Validation(
                messages::ASSIGNMENT_NOT_FOUND.to_string(),
            ));
        }

        tracing::info!(teacher_id, version_id, user_id = actor.id(), "Teacher unassigned");
        Ok(())
    }
}

pub struct ListAssignmentsUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ListAssignmentsUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Teachers assigned to a version. Admin only.
    pub async fn execute(
        &self,
        actor_id: DbId,
        version_id: DbId,
    ) -> Result<Vec<TeacherAssignment>, CoreError> {
        load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageAssignments)?;
        self.store
            .list_assignments_for_version(version_id)
            .await
            .or_unexpected()
    }
}

pub struct ListMyAssignmentsUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ListMyAssignmentsUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// The caller's own assignments, newest first.
    pub async fn execute(&self, actor_id: DbId) -> Result<Vec<TeacherAssignment>, CoreError> {
        let actor = authenticate(self.store, actor_id).await?;
        self.store
            .list_assignments_for_teacher(actor.id())
            .await
            .or_unexpected()
    }
}

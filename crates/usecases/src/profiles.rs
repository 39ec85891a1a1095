//! Profile use-cases: the caller's own profile and admin user management.

use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::permissions::Action;
use aula_core::roles::Role;
use aula_core::types::DbId;
use aula_db::models::profile::Profile;
use aula_db::ContentStore;

use crate::context::{authenticate, authorize_global, load_profile};
use crate::error::StoreResultExt;

pub struct GetCurrentProfileUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> GetCurrentProfileUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, actor_id: DbId) -> Result<Profile, CoreError> {
        Ok(authenticate(self.store, actor_id).await?.profile)
    }
}

pub struct ListProfilesUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ListProfilesUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, actor_id: DbId) -> Result<Vec<Profile>, CoreError> {
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageUsers)?;
        self.store.list_profiles().await.or_unexpected()
    }
}

pub struct UpdateProfileRoleUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UpdateProfileRoleUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Change another user's role. An admin cannot demote themselves, so the
    /// platform never loses its last administrator by accident.
    pub async fn execute(
        &self,
        actor_id: DbId,
        profile_id: DbId,
        role: &str,
    ) -> Result<Profile, CoreError> {
        load_profile(self.store, profile_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageUsers)?;

        let role = Role::from_name(role)?;
        if profile_id == actor.id() && role != Role::Admin {
            return Err(CoreError::forbidden(messages::CANNOT_DEMOTE_SELF));
        }

        let profile = self
            .store
            .update_profile_role(profile_id, role.as_str())
            .await
            .or_unexpected()?
            .ok_or(CoreError::NotFound {
                entity: "Perfil",
                id: profile_id,
            })?;

        tracing::info!(profile_id, role = %role, user_id = actor.id(), "Profile role updated");
        Ok(profile)
    }
}

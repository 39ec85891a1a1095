//! Profile models: one row per authenticated user.

use aula_core::error::CoreError;
use aula_core::roles::Role;
use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table.
///
/// The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// Parse the stored role name.
    pub fn role(&self) -> Result<Role, CoreError> {
        Role::from_name(&self.role)
    }
}

/// Input for inserting a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub password_hash: String,
}

//! Course version models.

use aula_core::error::CoreError;
use aula_core::types::{DbId, Timestamp};
use aula_core::versioning::VersionStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `course_versions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseVersion {
    pub id: DbId,
    pub course_id: DbId,
    pub status: String,
    pub version_label: String,
    pub created_by: DbId,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CourseVersion {
    pub fn status(&self) -> Result<VersionStatus, CoreError> {
        VersionStatus::from_name(&self.status)
    }
}

/// Input for opening a new draft version.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDraftVersion {
    pub course_id: DbId,
    pub version_label: String,
    pub created_by: DbId,
    /// Version whose content is copied into the draft.
    pub base_version_id: Option<DbId>,
    /// Teacher assigned to the new draft in the same transaction, recorded
    /// as assigning themselves.
    pub assign_teacher: Option<DbId>,
}

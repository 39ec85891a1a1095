use aula_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `teacher_assignments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TeacherAssignment {
    pub id: DbId,
    pub teacher_id: DbId,
    pub course_version_id: DbId,
    pub assigned_by: Option<DbId>,
    pub created_at: Timestamp,
}

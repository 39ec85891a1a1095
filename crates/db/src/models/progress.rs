use aula_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student_progress` table, unique per (student, topic).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentProgress {
    pub id: DbId,
    pub student_id: DbId,
    pub topic_id: DbId,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

//! Repository for the `student_progress` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::StudentProgress;

/// Column list for student_progress queries.
const COLUMNS: &str = "id, student_id, topic_id, completed, completed_at, created_at, updated_at";

pub struct ProgressRepo;

impl ProgressRepo {
    /// Insert or update the (student, topic) record.
    ///
    /// Re-completing a topic keeps the original `completed_at`; resetting it
    /// clears the timestamp.
    pub async fn upsert(
        pool: &PgPool,
        student_id: DbId,
        topic_id: DbId,
        completed: bool,
    ) -> Result<StudentProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_progress (student_id, topic_id, completed, completed_at)
             VALUES ($1, $2, $3, CASE WHEN $3 THEN NOW() ELSE NULL END)
             ON CONFLICT ON CONSTRAINT uq_student_progress_student_topic DO UPDATE SET
                completed = EXCLUDED.completed,
                completed_at = CASE
                    WHEN EXCLUDED.completed THEN COALESCE(student_progress.completed_at, NOW())
                    ELSE NULL
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentProgress>(&query)
            .bind(student_id)
            .bind(topic_id)
            .bind(completed)
            .fetch_one(pool)
            .await
    }

    /// A student's records for every topic of a version.
    pub async fn list_for_version(
        pool: &PgPool,
        student_id: DbId,
        course_version_id: DbId,
    ) -> Result<Vec<StudentProgress>, sqlx::Error> {
        let query = format!(
            "SELECT p.{} FROM student_progress p
             JOIN topics t ON t.id = p.topic_id
             WHERE p.student_id = $1 AND t.course_version_id = $2
             ORDER BY t.order_index ASC, t.id ASC",
            COLUMNS.replace(", ", ", p.")
        );
        sqlx::query_as::<_, StudentProgress>(&query)
            .bind(student_id)
            .bind(course_version_id)
            .fetch_all(pool)
            .await
    }
}

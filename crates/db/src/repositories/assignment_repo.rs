//! Repository for the `teacher_assignments` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::assignment::TeacherAssignment;

/// Column list for teacher_assignments queries.
const COLUMNS: &str = "id, teacher_id, course_version_id, assigned_by, created_at";

pub struct TeacherAssignmentRepo;

impl TeacherAssignmentRepo {
    pub async fn exists(
        pool: &PgPool,
        teacher_id: DbId,
        course_version_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM teacher_assignments
                WHERE teacher_id = $1 AND course_version_id = $2
             )",
        )
        .bind(teacher_id)
        .bind(course_version_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    pub async fn create(
        pool: &PgPool,
        teacher_id: DbId,
        course_version_id: DbId,
        assigned_by: Option<DbId>,
    ) -> Result<TeacherAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO teacher_assignments (teacher_id, course_version_id, assigned_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeacherAssignment>(&query)
            .bind(teacher_id)
            .bind(course_version_id)
            .bind(assigned_by)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        teacher_id: DbId,
        course_version_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM teacher_assignments WHERE teacher_id = $1 AND course_version_id = $2",
        )
        .bind(teacher_id)
        .bind(course_version_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_by_version(
        pool: &PgPool,
        course_version_id: DbId,
    ) -> Result<Vec<TeacherAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teacher_assignments
             WHERE course_version_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TeacherAssignment>(&query)
            .bind(course_version_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<TeacherAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teacher_assignments
             WHERE teacher_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TeacherAssignment>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }
}

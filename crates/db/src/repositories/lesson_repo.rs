//! Repository for the `lessons` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::course_module::{CreateLesson, Lesson};

/// Column list for lessons queries.
const COLUMNS: &str = "id, module_id, title, content, order_index, created_at, updated_at";

pub struct LessonRepo;

impl LessonRepo {
    pub async fn create(pool: &PgPool, input: &CreateLesson) -> Result<Lesson, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (module_id, title, content, order_index)
             VALUES ($1, $2, $3, COALESCE($4,
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM lessons WHERE module_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(input.module_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lesson>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, Lesson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All lessons under every module of a version.
    pub async fn list_by_version(
        pool: &PgPool,
        course_version_id: DbId,
    ) -> Result<Vec<Lesson>, sqlx::Error> {
        let query = format!(
            "SELECT l.{} FROM lessons l
             JOIN course_modules m ON m.id = l.module_id
             WHERE m.course_version_id = $1
             ORDER BY l.module_id ASC, l.order_index ASC, l.id ASC",
            COLUMNS.replace(", ", ", l.")
        );
        sqlx::query_as::<_, Lesson>(&query)
            .bind(course_version_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

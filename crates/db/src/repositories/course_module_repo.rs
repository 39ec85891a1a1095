//! Repository for the `course_modules` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::course_module::{CourseModule, CreateCourseModule};

/// Column list for course_modules queries.
const COLUMNS: &str = "id, course_version_id, title, description, order_index, created_at, updated_at";

pub struct CourseModuleRepo;

impl CourseModuleRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateCourseModule,
    ) -> Result<CourseModule, sqlx::Error> {
        let query = format!(
            "INSERT INTO course_modules (course_version_id, title, description, order_index)
             VALUES ($1, $2, $3, COALESCE($4,
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM course_modules WHERE course_version_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseModule>(&query)
            .bind(input.course_version_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CourseModule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_modules WHERE id = $1");
        sqlx::query_as::<_, CourseModule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_version(
        pool: &PgPool,
        course_version_id: DbId,
    ) -> Result<Vec<CourseModule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_modules
             WHERE course_version_id = $1
             ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, CourseModule>(&query)
            .bind(course_version_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a module; its lessons cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM course_modules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

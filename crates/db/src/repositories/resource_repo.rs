//! Repository for the `resources` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

/// Column list for resources queries.
const COLUMNS: &str = "id, topic_id, title, kind, file_url, file_name, file_size, \
    mime_type, external_url, order_index, created_at, updated_at";

pub struct ResourceRepo;

impl ResourceRepo {
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources
                (topic_id, title, kind, file_url, file_name, file_size,
                 mime_type, external_url, order_index)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9,
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM resources WHERE topic_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(input.topic_id)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(&input.file_url)
            .bind(&input.file_name)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(&input.external_url)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All resources under every topic of a version, ordered for display.
    pub async fn list_by_version(
        pool: &PgPool,
        course_version_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT r.{} FROM resources r
             JOIN topics t ON t.id = r.topic_id
             WHERE t.course_version_id = $1
             ORDER BY r.topic_id ASC, r.order_index ASC, r.id ASC",
            COLUMNS.replace(", ", ", r.")
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(course_version_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                title = COALESCE($1, title),
                external_url = COALESCE($2, external_url),
                order_index = COALESCE($3, order_index)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.title)
            .bind(&input.external_url)
            .bind(input.order_index)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of resources pointing at `file_url`. Drafts copied from another
    /// version share their files, so storage objects are only removed once the
    /// last reference is gone.
    pub async fn count_by_file_url(pool: &PgPool, file_url: &str) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM resources WHERE file_url = $1")
            .bind(file_url)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

//! Repository for the `topics` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::topic::{CreateTopic, Topic, UpdateTopic};

/// Column list for topics queries.
const COLUMNS: &str = "id, course_version_id, title, description, order_index, created_at, updated_at";

pub struct TopicRepo;

impl TopicRepo {
    /// Insert a topic. A missing `order_index` appends it after the last topic
    /// of the version.
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, sqlx::Error> {
        let query = format!(
            "INSERT INTO topics (course_version_id, title, description, order_index)
             VALUES ($1, $2, $3, COALESCE($4,
                (SELECT COALESCE(MAX(order_index) + 1, 0) FROM topics WHERE course_version_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(input.course_version_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_version(
        pool: &PgPool,
        course_version_id: DbId,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics
             WHERE course_version_id = $1
             ORDER BY order_index ASC, id ASC"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(course_version_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTopic,
    ) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!(
            "UPDATE topics SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                order_index = COALESCE($3, order_index)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.order_index)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a topic; resources, progress and comments cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

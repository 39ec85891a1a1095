//! Repository for the `topic_comments` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{CreateComment, TopicComment};

/// Column list for topic_comments queries.
const COLUMNS: &str = "id, topic_id, author_id, parent_id, body, created_at, updated_at";

pub struct TopicCommentRepo;

impl TopicCommentRepo {
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<TopicComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO topic_comments (topic_id, author_id, parent_id, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TopicComment>(&query)
            .bind(input.topic_id)
            .bind(input.author_id)
            .bind(input.parent_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TopicComment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topic_comments WHERE id = $1");
        sqlx::query_as::<_, TopicComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update_body(
        pool: &PgPool,
        id: DbId,
        body: &str,
    ) -> Result<Option<TopicComment>, sqlx::Error> {
        let query = format!("UPDATE topic_comments SET body = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, TopicComment>(&query)
            .bind(body)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Comments of a topic in posting order (replies interleaved).
    pub async fn list_by_topic(
        pool: &PgPool,
        topic_id: DbId,
    ) -> Result<Vec<TopicComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topic_comments
             WHERE topic_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TopicComment>(&query)
            .bind(topic_id)
            .fetch_all(pool)
            .await
    }
}

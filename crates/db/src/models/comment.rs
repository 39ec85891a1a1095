//! Topic comment models.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topic_comments` table. Replies carry a `parent_id`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TopicComment {
    pub id: DbId,
    pub topic_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub topic_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub body: String,
}

//! Topic models and DTOs.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topics` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Topic {
    pub id: DbId,
    pub course_version_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a topic. A missing `order_index` appends the topic.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopic {
    pub course_version_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub order_index: Option<i32>,
}

/// Input for updating a topic (all fields optional).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTopic {
    pub title: Option<String>,
    pub description: Option<String>,
    pub order_index: Option<i32>,
}

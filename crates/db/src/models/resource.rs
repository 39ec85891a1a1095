//! Resource models and DTOs.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `resources` table.
///
/// `kind = "file"` rows carry the `file_*` columns; `kind = "link"` rows carry
/// `external_url`. A check constraint enforces the split.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Resource {
    pub id: DbId,
    pub topic_id: DbId,
    pub title: String,
    pub kind: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub external_url: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a resource.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub topic_id: DbId,
    pub title: String,
    pub kind: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub external_url: Option<String>,
    pub order_index: Option<i32>,
}

/// Input for updating a resource. Only the title, link target and position
/// are editable; replacing a file means uploading a new resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResource {
    pub title: Option<String>,
    pub external_url: Option<String>,
    pub order_index: Option<i32>,
}

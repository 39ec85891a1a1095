//! Course models and DTOs.

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::course_version::CourseVersion;

/// A row from the `courses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub is_visible: bool,
    pub active_version_id: Option<DbId>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a course (the initial version is passed separately).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub is_visible: bool,
}

/// Input for updating a course (all fields optional).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_visible: Option<bool>,
}

/// A course together with its active version, if any.
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithVersion {
    #[serde(flatten)]
    pub course: Course,
    pub active_version: Option<CourseVersion>,
}

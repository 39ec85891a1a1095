//! Module and lesson models (the module -> lesson content hierarchy).

use aula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `course_modules` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseModule {
    pub id: DbId,
    pub course_version_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseModule {
    pub course_version_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub order_index: Option<i32>,
}

/// A row from the `lessons` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lesson {
    pub id: DbId,
    pub module_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLesson {
    pub module_id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub order_index: Option<i32>,
}

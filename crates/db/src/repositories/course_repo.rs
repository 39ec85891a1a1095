//! Repository for the `courses` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};
use crate::models::course_version::CourseVersion;

/// Column list for courses queries.
pub(crate) const COLUMNS: &str = "id, title, description, slug, is_visible, \
    active_version_id, created_by, created_at, updated_at";

pub struct CourseRepo;

impl CourseRepo {
    /// Insert a course and its initial draft version in one transaction,
    /// pointing `active_version_id` at the new version.
    pub async fn create_with_version(
        pool: &PgPool,
        input: &CreateCourse,
        version_label: &str,
        created_by: DbId,
    ) -> Result<(Course, CourseVersion), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let course_id: (DbId,) = sqlx::query_as(
            "INSERT INTO courses (title, description, slug, is_visible, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.slug)
        .bind(input.is_visible)
        .bind(created_by)
        .fetch_one(&mut *tx)
        .await?;

        let version_query = format!(
            "INSERT INTO course_versions (course_id, status, version_label, created_by)
             VALUES ($1, 'draft', $2, $3)
             RETURNING {}",
            super::course_version_repo::COLUMNS
        );
        let version = sqlx::query_as::<_, CourseVersion>(&version_query)
            .bind(course_id.0)
            .bind(version_label)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        let course_query = format!(
            "UPDATE courses SET active_version_id = $1 WHERE id = $2 RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&course_query)
            .bind(version.id)
            .bind(course_id.0)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((course, version))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all courses, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Update a course. Returns the updated row, or `None` if not found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                is_visible = COALESCE($3, is_visible)
             WHERE id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.is_visible)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

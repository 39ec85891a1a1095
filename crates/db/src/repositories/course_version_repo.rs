//! Repository for the `course_versions` table, including the transactional
//! lifecycle operations (draft creation with content copy, publish, archive).

use aula_core::types::DbId;
use aula_core::versioning::{STATUS_ARCHIVED, STATUS_DRAFT, STATUS_PUBLISHED};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::course_version::{CourseVersion, CreateDraftVersion};

/// Column list for course_versions queries.
pub(crate) const COLUMNS: &str = "id, course_id, status, version_label, created_by, \
    approved_at, created_at, updated_at";

pub struct CourseVersionRepo;

impl CourseVersionRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CourseVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM course_versions WHERE id = $1");
        sqlx::query_as::<_, CourseVersion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a course's versions, newest first.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<CourseVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM course_versions
             WHERE course_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, CourseVersion>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a draft version, copying the base version's content when
    /// `base_version_id` is set and assigning `assign_teacher` to it. Runs in
    /// a single transaction.
    pub async fn create_draft(
        pool: &PgPool,
        input: &CreateDraftVersion,
    ) -> Result<CourseVersion, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO course_versions (course_id, status, version_label, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let version = sqlx::query_as::<_, CourseVersion>(&query)
            .bind(input.course_id)
            .bind(STATUS_DRAFT)
            .bind(&input.version_label)
            .bind(input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(base_id) = input.base_version_id {
            copy_topics(&mut tx, base_id, version.id).await?;
            copy_modules(&mut tx, base_id, version.id).await?;
        }

        if let Some(teacher_id) = input.assign_teacher {
            sqlx::query(
                "INSERT INTO teacher_assignments (teacher_id, course_version_id, assigned_by)
                 VALUES ($1, $2, $1)",
            )
            .bind(teacher_id)
            .bind(version.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(version)
    }

    /// Publish a draft version.
    ///
    /// Locks the course row so concurrent publishes of the same course are
    /// serialized, archives the previously published version, publishes this
    /// one and points the course at it. Returns `None` if the version does not
    /// exist or is no longer a draft.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<CourseVersion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some((course_id,)) =
            sqlx::query_as::<_, (DbId,)>("SELECT course_id FROM course_versions WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Ok(None);
        };

        sqlx::query("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        let status: (String,) =
            sqlx::query_as("SELECT status FROM course_versions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if status.0 != STATUS_DRAFT {
            return Ok(None);
        }

        let superseded = sqlx::query(
            "UPDATE course_versions SET status = $1
             WHERE course_id = $2 AND status = $3",
        )
        .bind(STATUS_ARCHIVED)
        .bind(course_id)
        .bind(STATUS_PUBLISHED)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE course_versions SET status = $1, approved_at = NOW()
             WHERE id = $2
             RETURNING {COLUMNS}"
        );
        let version = sqlx::query_as::<_, CourseVersion>(&query)
            .bind(STATUS_PUBLISHED)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE courses SET active_version_id = $1 WHERE id = $2")
            .bind(id)
            .bind(course_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            version_id = id,
            course_id,
            superseded = superseded.rows_affected(),
            "Course version published"
        );
        Ok(Some(version))
    }

    /// Archive a published version. Returns `None` if the version does not
    /// exist or is not published.
    pub async fn archive(pool: &PgPool, id: DbId) -> Result<Option<CourseVersion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE course_versions SET status = $1
             WHERE id = $2 AND status = $3
             RETURNING {COLUMNS}"
        );
        let Some(version) = sqlx::query_as::<_, CourseVersion>(&query)
            .bind(STATUS_ARCHIVED)
            .bind(id)
            .bind(STATUS_PUBLISHED)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE courses SET active_version_id = NULL
             WHERE id = $1 AND active_version_id = $2",
        )
        .bind(version.course_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(version))
    }
}

/// Copy every topic (and its resources) from one version to another.
async fn copy_topics(
    tx: &mut Transaction<'_, Postgres>,
    from_version: DbId,
    to_version: DbId,
) -> Result<(), sqlx::Error> {
    let topic_ids: Vec<(DbId,)> = sqlx::query_as(
        "SELECT id FROM topics WHERE course_version_id = $1 ORDER BY order_index, id",
    )
    .bind(from_version)
    .fetch_all(&mut **tx)
    .await?;

    for (old_id,) in topic_ids {
        let (new_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO topics (course_version_id, title, description, order_index)
             SELECT $1, title, description, order_index FROM topics WHERE id = $2
             RETURNING id",
        )
        .bind(to_version)
        .bind(old_id)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query(
            "INSERT INTO resources
                (topic_id, title, kind, file_url, file_name, file_size,
                 mime_type, external_url, order_index)
             SELECT $1, title, kind, file_url, file_name, file_size,
                    mime_type, external_url, order_index
             FROM resources WHERE topic_id = $2",
        )
        .bind(new_id)
        .bind(old_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Copy every module (and its lessons) from one version to another.
async fn copy_modules(
    tx: &mut Transaction<'_, Postgres>,
    from_version: DbId,
    to_version: DbId,
) -> Result<(), sqlx::Error> {
    let module_ids: Vec<(DbId,)> = sqlx::query_as(
        "SELECT id FROM course_modules WHERE course_version_id = $1 ORDER BY order_index, id",
    )
    .bind(from_version)
    .fetch_all(&mut **tx)
    .await?;

    for (old_id,) in module_ids {
        let (new_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO course_modules (course_version_id, title, description, order_index)
             SELECT $1, title, description, order_index FROM course_modules WHERE id = $2
             RETURNING id",
        )
        .bind(to_version)
        .bind(old_id)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query(
            "INSERT INTO lessons (module_id, title, content, order_index)
             SELECT $1, title, content, order_index FROM lessons WHERE module_id = $2",
        )
        .bind(new_id)
        .bind(old_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

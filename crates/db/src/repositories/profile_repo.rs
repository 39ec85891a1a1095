//! Repository for the `profiles` table.

use aula_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile};

/// Column list for profiles queries.
const COLUMNS: &str = "id, email, full_name, role, password_hash, created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (email, full_name, role, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive lookup by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY id ASC");
        sqlx::query_as::<_, Profile>(&query).fetch_all(pool).await
    }

    /// Change a profile's role. Returns `None` if the profile does not exist.
    pub async fn update_role(
        pool: &PgPool,
        id: DbId,
        role: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("UPDATE profiles SET role = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Profile>(&query)
            .bind(role)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

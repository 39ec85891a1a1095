/// Error returned by every [`crate::store::ContentStore`] operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint (named `uq_*`) was violated.
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A computed value does not fit its column (SQLSTATE 22003).
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// The backing store cannot serve requests (e.g. poisoned in-memory state).
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    /// PostgreSQL unique violations (SQLSTATE 23505) on `uq_`-prefixed
    /// constraints become [`StoreError::UniqueViolation`].
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("22003") {
                return Self::OutOfRange(db_err.message().to_string());
            }
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return Self::UniqueViolation(constraint.to_string());
                }
            }
        }
        Self::Database(err)
    }
}

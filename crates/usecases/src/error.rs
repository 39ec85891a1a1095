//! Mapping of store and storage failures onto [`CoreError`].

use aula_core::error::CoreError;
use aula_core::messages;
use aula_db::StoreError;

/// Log an infrastructure failure and replace it with the generic message.
pub fn unexpected(err: impl std::fmt::Display) -> CoreError {
    tracing::error!(error = %err, "Unexpected infrastructure error");
    CoreError::Internal(messages::UNEXPECTED_ERROR.to_string())
}

/// Conversions from [`StoreError`] results used by every use-case.
pub trait StoreResultExt<T> {
    /// Any store failure is unexpected.
    fn or_unexpected(self) -> Result<T, CoreError>;

    /// A unique violation becomes a [`CoreError::Conflict`] with `message`;
    /// anything else is unexpected.
    fn or_conflict(self, message: &str) -> Result<T, CoreError>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn or_unexpected(self) -> Result<T, CoreError> {
        self.map_err(unexpected)
    }

    fn or_conflict(self, message: &str) -> Result<T, CoreError> {
        self.map_err(|err| match err {
            StoreError::UniqueViolation(constraint) => {
                tracing::debug!(constraint = %constraint, "Unique constraint violated");
                CoreError::conflict(message)
            }
            other => unexpected(other),
        })
    }
}

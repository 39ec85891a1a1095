use crate::types::DbId;

/// Domain error returned by every use-case.
///
/// Messages are user-facing and written in Spanish. The HTTP layer maps each
/// variant onto a status code; the message is passed through unchanged except
/// for [`CoreError::Internal`], whose detail is logged and replaced.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} con id {id} no encontrado")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Error interno: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Forbidden`] with a static message.
    pub fn forbidden(msg: &str) -> Self {
        Self::Forbidden(msg.to_string())
    }

    /// Shorthand for a [`CoreError::Conflict`] with a static message.
    pub fn conflict(msg: &str) -> Self {
        Self::Conflict(msg.to_string())
    }
}

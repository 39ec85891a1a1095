//! JWT-based authentication extractor for axum handlers.

use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::types::DbId;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extracted from the `Authorization: Bearer` header.
///
/// Only proves who the caller is. The use-cases reload the profile and decide
/// what they may do.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    /// Role at the time the token was issued.
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = |msg: &str| AppError::Core(CoreError::Unauthorized(msg.to_string()));

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized(messages::MISSING_AUTH_HEADER))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized(messages::INVALID_AUTH_FORMAT))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized(messages::INVALID_TOKEN))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

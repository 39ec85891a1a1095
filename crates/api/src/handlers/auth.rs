//! Handlers for the `/auth` resource (register, login, current profile).

use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::roles::ROLE_STUDENT;
use aula_db::models::profile::{CreateProfile, Profile};
use aula_usecases::error::StoreResultExt;
use aula_usecases::profiles::GetCurrentProfileUseCase;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_body;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::{created, ok, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, max = 200, message = "El nombre no puede estar vacío"))]
    pub full_name: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "El correo es obligatorio"))]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// Absolute URL the client should navigate to next.
    pub redirect_url: String,
    pub user: Profile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a student profile and sign it in.
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    input.email = normalize_email(&input.email);
    validate_body(&input)?;
    validate_password_strength(&input.password).map_err(CoreError::Validation)?;

    if state
        .store
        .find_profile_by_email(&input.email)
        .await
        .or_unexpected()?
        .is_some()
    {
        return Err(CoreError::conflict(messages::EMAIL_TAKEN).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let profile = state
        .store
        .create_profile(&CreateProfile {
            email: input.email,
            full_name: input.full_name.trim().to_string(),
            role: ROLE_STUDENT.to_string(),
            password_hash,
        })
        .await
        .or_conflict(messages::EMAIL_TAKEN)?;

    tracing::info!(user_id = profile.id, "Profile registered");
    Ok(created(auth_response(&state, profile)?))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    input.email = normalize_email(&input.email);
    validate_body(&input)?;
    let invalid = || AppError::Core(CoreError::Unauthorized(messages::INVALID_CREDENTIALS.into()));

    let profile = state
        .store
        .find_profile_by_email(&input.email)
        .await
        .or_unexpected()?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &profile.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = profile.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    tracing::info!(user_id = profile.id, "Login succeeded");
    Ok(ok(auth_response(&state, profile)?))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = GetCurrentProfileUseCase::new(state.store.as_ref())
        .execute(auth.user_id)
        .await?;
    Ok(ok(profile))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Token plus the role's landing page.
fn auth_response(state: &AppState, profile: Profile) -> AppResult<AuthResponse> {
    let landing_path = profile.role()?.landing_path();
    let access_token = generate_access_token(profile.id, &profile.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in(),
        redirect_url: state.config.site_link(landing_path),
        user: profile,
    })
}

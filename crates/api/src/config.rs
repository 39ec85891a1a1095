use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Default request body ceiling for uploads: the largest category (video,
/// 500 MiB) plus headroom for the other multipart fields.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 501 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{0} has an invalid value '{1}'")]
    Invalid(&'static str, String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Public site root used to build post-login redirect URLs.
    pub site_url: String,
    /// Body limit applied to the upload route.
    pub max_upload_bytes: usize,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SITE_URL`             | `http://localhost:5173`    |
    /// | `MAX_UPLOAD_BYTES`     | 501 MiB                    |
    ///
    /// `JWT_SECRET` is required; see [`JwtConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 3000u16)?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| o.parse::<HeaderValue>().is_err())
        {
            return Err(ConfigError::Invalid("CORS_ORIGINS", bad.clone()));
        }

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30u64)?;

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .trim_end_matches('/')
            .to_string();
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(ConfigError::Invalid("SITE_URL", site_url));
        }

        let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            site_url,
            max_upload_bytes,
            jwt: JwtConfig::from_env()?,
        })
    }

    /// Absolute URL under the public site.
    pub fn site_link(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

//! Object storage abstraction for uploaded course files.
//!
//! The trait keeps the use-cases independent from the storage vendor; the
//! `aula-storage` crate provides the S3 and in-memory implementations.

use async_trait::async_trait;

/// Errors raised by an [`ObjectStorage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to put object '{key}': {reason}")]
    Put { key: String, reason: String },

    #[error("Failed to delete object '{key}': {reason}")]
    Delete { key: String, reason: String },

    #[error("Storage misconfigured: {0}")]
    Config(String),
}

/// Blob storage for uploaded files.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `content` under `key`.
    async fn put_object(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// Remove the object under `key`. Deleting a missing key is not an error.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL under which `key` is served.
    fn public_url(&self, key: &str) -> String;

    /// Recover the storage key from a URL produced by [`Self::public_url`].
    ///
    /// Returns `None` for URLs that do not belong to this storage.
    fn key_from_url(&self, url: &str) -> Option<String>;
}

/// Join a base URL and a key with exactly one `/` between them.
pub fn join_public_url(base_url: &str, key: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        key.trim_start_matches('/')
    )
}

/// Inverse of [`join_public_url`].
pub fn strip_public_url(base_url: &str, url: &str) -> Option<String> {
    let prefix = format!("{}/", base_url.trim_end_matches('/'));
    url.strip_prefix(&prefix)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_and_strip_are_inverse() {
        let url = join_public_url("https://cdn.example.com/aula/", "courses/1/topics/2/a.pdf");
        assert_eq!(url, "https://cdn.example.com/aula/courses/1/topics/2/a.pdf");
        assert_eq!(
            strip_public_url("https://cdn.example.com/aula", &url).as_deref(),
            Some("courses/1/topics/2/a.pdf")
        );
    }

    #[test]
    fn foreign_url_has_no_key() {
        assert_eq!(
            strip_public_url("https://cdn.example.com/aula", "https://other.com/x.pdf"),
            None
        );
        assert_eq!(
            strip_public_url("https://cdn.example.com/aula", "https://cdn.example.com/aula/"),
            None
        );
    }
}

use async_trait::async_trait;
use aula_core::storage::{join_public_url, strip_public_url, ObjectStorage, StorageError};

/// S3-backed object storage.
pub struct S3ObjectStorage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStorage {
    /// Create a client from environment variables:
    /// - `S3_BUCKET`: the bucket name (required)
    /// - `S3_ENDPOINT`: custom endpoint for MinIO and other S3-compatible
    ///   services; enables path-style addressing
    /// - `S3_PUBLIC_URL`: base URL objects are served from. Defaults to
    ///   `{S3_ENDPOINT}/{bucket}` or the AWS virtual-hosted URL
    ///
    /// Credentials and region come from the standard AWS provider chain.
    pub async fn from_env() -> Result<Self, StorageError> {
        let bucket = std::env::var("S3_BUCKET")
            .map_err(|_| StorageError::Config("S3_BUCKET not set".into()))?;
        let endpoint = std::env::var("S3_ENDPOINT").ok();

        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &endpoint {
            config_loader = config_loader.endpoint_url(endpoint);
        }
        let sdk_config = config_loader.load().await;

        let client = aws_sdk_s3::Client::from_conf(
            aws_sdk_s3::config::Builder::from(&sdk_config)
                .force_path_style(endpoint.is_some())
                .build(),
        );

        let public_base_url = std::env::var("S3_PUBLIC_URL")
            .unwrap_or_else(|_| default_public_url(endpoint.as_deref(), &bucket));

        tracing::info!(bucket = %bucket, public_base_url = %public_base_url, "S3 storage configured");
        Ok(Self::new(client, bucket, public_base_url))
    }

    /// Create with explicit values (useful for tests against MinIO).
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url,
        }
    }
}

fn default_public_url(endpoint: Option<&str>, bucket: &str) -> String {
    match endpoint {
        Some(endpoint) => join_public_url(endpoint, bucket),
        None => format!("https://{bucket}.s3.amazonaws.com"),
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn put_object(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(content.into())
            .send()
            .await
            .map_err(|e| StorageError::Put {
                key: key.to_string(),
                reason: e.into_service_error().to_string(),
            })?;
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                reason: e.into_service_error().to_string(),
            })?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        join_public_url(&self.public_base_url, key)
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        strip_public_url(&self.public_base_url, url)
    }
}

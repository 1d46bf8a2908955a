use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload an object, overwriting any existing object with the same key.
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;

    /// Create the backing bucket if absent and make it publicly readable.
    /// An already-existing bucket is not an error.
    async fn ensure_bucket(&self) -> Result<(), ObjectStorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectStorageError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("bucket setup failed: {0}")]
    BucketSetupFailed(String),
}

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ObjectStorage, ObjectStorageError};

/// Filesystem-backed store for offline runs. The base directory plays the
/// bucket role.
pub struct LocalObjectStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalObjectStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ObjectStorageError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| ObjectStorageError::BucketSetupFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ObjectStorageError::BucketSetupFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait]
impl ObjectStorage for LocalObjectStore {
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        _content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let store_path = StorePath::from(key);
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| ObjectStorageError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn ensure_bucket(&self) -> Result<(), ObjectStorageError> {
        // Base directory is created in `new`.
        Ok(())
    }
}

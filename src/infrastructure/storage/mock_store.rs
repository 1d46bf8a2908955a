use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{ObjectStorage, ObjectStorageError};

/// In-memory store recording uploaded keys, optionally failing every upload.
#[derive(Default)]
pub struct MockObjectStorage {
    fail_uploads: bool,
    uploads: Mutex<Vec<(String, usize)>>,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_uploads: true,
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploaded_keys(&self) -> Vec<String> {
        self.uploads
            .lock()
            .expect("mock store lock poisoned")
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        _content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        if self.fail_uploads {
            return Err(ObjectStorageError::UploadFailed("mock failure".to_string()));
        }
        self.uploads
            .lock()
            .expect("mock store lock poisoned")
            .push((key.to_string(), data.len()));
        Ok(())
    }

    async fn ensure_bucket(&self) -> Result<(), ObjectStorageError> {
        Ok(())
    }
}

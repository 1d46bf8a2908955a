use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::application::ports::{ObjectStorage, ObjectStorageError};

/// Supabase Storage over its REST surface. Uploads carry `x-upsert` so
/// re-running a batch overwrites objects instead of erroring on duplicates.
pub struct SupabaseObjectStore {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseObjectStore {
    pub fn new(base_url: &str, service_key: &str, bucket: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            bucket: bucket.to_string(),
        }
    }

    async fn create_bucket(&self) -> Result<(), ObjectStorageError> {
        let url = format!("{}/storage/v1/bucket", self.base_url);
        let body = serde_json::json!({ "name": self.bucket, "public": true });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ObjectStorageError::BucketSetupFailed(format!("create request: {e}")))?;

        if response.status().as_u16() == 409 {
            tracing::info!(bucket = %self.bucket, "bucket already exists");
            return Ok(());
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ObjectStorageError::BucketSetupFailed(format!(
                "create returned {status}: {text}"
            )));
        }

        tracing::info!(bucket = %self.bucket, "bucket created");
        Ok(())
    }

    async fn set_bucket_public(&self) -> Result<(), ObjectStorageError> {
        let url = format!("{}/storage/v1/bucket/{}", self.base_url, self.bucket);
        let body = serde_json::json!({ "public": true });

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ObjectStorageError::BucketSetupFailed(format!("update request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ObjectStorageError::BucketSetupFailed(format!(
                "update returned {status}: {text}"
            )));
        }

        tracing::info!(bucket = %self.bucket, "bucket set to public");
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for SupabaseObjectStore {
    #[tracing::instrument(skip(self, data), fields(bucket = %self.bucket, key = %key))]
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(data)
            .send()
            .await
            .map_err(|e| ObjectStorageError::UploadFailed(format!("upload request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ObjectStorageError::UploadFailed(format!(
                "upload returned {status}: {text}"
            )));
        }

        tracing::info!("object uploaded");
        Ok(())
    }

    async fn ensure_bucket(&self) -> Result<(), ObjectStorageError> {
        self.create_bucket().await?;
        self.set_bucket_public().await
    }
}

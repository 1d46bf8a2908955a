use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ContentRepository, ContentRepositoryError, CourseContent};
use crate::domain::CourseId;

/// Course content table access over PostgREST. Course ids are slugs
/// (`[a-z0-9_-]`), so they are embedded in filter expressions verbatim.
pub struct SupabaseContentRepository {
    client: Client,
    base_url: String,
    service_key: String,
    table: String,
}

#[derive(Deserialize)]
struct CourseContentRow {
    course_id: String,
    #[serde(default)]
    content: Option<String>,
}

impl SupabaseContentRepository {
    pub fn new(base_url: &str, service_key: &str, table: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            table: table.to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ContentRepository for SupabaseContentRepository {
    #[tracing::instrument(skip(self), fields(course_id = %course_id))]
    async fn find(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<CourseContent>, ContentRepositoryError> {
        let url = format!(
            "{}?course_id=eq.{}&select=course_id,content",
            self.table_url(),
            course_id
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .send()
            .await
            .map_err(|e| ContentRepositoryError::QueryFailed(format!("select request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ContentRepositoryError::QueryFailed(format!(
                "select returned {status}: {text}"
            )));
        }

        let rows: Vec<CourseContentRow> = response
            .json()
            .await
            .map_err(|e| ContentRepositoryError::QueryFailed(format!("select parse: {e}")))?;

        Ok(rows.into_iter().next().map(|row| CourseContent {
            course_id: row.course_id,
            content: row.content.unwrap_or_default(),
        }))
    }

    #[tracing::instrument(skip(self, content), fields(course_id = %course_id))]
    async fn insert(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError> {
        let body = serde_json::json!({
            "course_id": course_id.as_str(),
            "content": content,
        });

        let response = self
            .client
            .post(self.table_url())
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentRepositoryError::QueryFailed(format!("insert request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ContentRepositoryError::QueryFailed(format!(
                "insert returned {status}: {text}"
            )));
        }

        tracing::info!("course content created");
        Ok(())
    }

    #[tracing::instrument(skip(self, content), fields(course_id = %course_id))]
    async fn update(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError> {
        let url = format!("{}?course_id=eq.{}", self.table_url(), course_id);
        let body = serde_json::json!({
            "content": content,
            "updated_at": Utc::now().to_rfc3339(),
        });

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentRepositoryError::QueryFailed(format!("update request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ContentRepositoryError::QueryFailed(format!(
                "update returned {status}: {text}"
            )));
        }

        tracing::info!("course content updated");
        Ok(())
    }
}

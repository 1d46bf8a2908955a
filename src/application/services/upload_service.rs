use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    ContentRepository, ContentRepositoryError, ObjectStorage, ObjectStorageError, TextExtractor,
    TextExtractorError,
};
use crate::domain::{resolve_course_id, CourseId, CourseIdResolution, SourcePdf};

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Sequential batch processor: each PDF is taken through read, id
/// resolution, text extraction, storage upload, and content save before the
/// next one starts. Failures are tallied per document and never stop the
/// batch.
pub struct UploadService {
    extractor: Arc<dyn TextExtractor>,
    storage: Arc<dyn ObjectStorage>,
    repository: Arc<dyn ContentRepository>,
}

impl UploadService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        storage: Arc<dyn ObjectStorage>,
        repository: Arc<dyn ContentRepository>,
    ) -> Self {
        Self {
            extractor,
            storage,
            repository,
        }
    }

    pub async fn run(&self, root_dir: &Path, pdf_files: &[SourcePdf]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for pdf in pdf_files {
            tracing::info!(
                file = %pdf.file_name(),
                folder = %pdf.folder_name(),
                "processing document"
            );

            match self.process(root_dir, pdf).await {
                Ok(course_id) => {
                    tracing::info!(course_id = %course_id, file = %pdf.file_name(), "document processed");
                    summary.succeeded += 1;
                }
                Err(error) => {
                    tracing::error!(file = %pdf.file_name(), error = %error, "document failed");
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    async fn process(&self, root_dir: &Path, pdf: &SourcePdf) -> Result<CourseId, DocumentError> {
        let resolution = resolve_course_id(pdf.path(), root_dir);
        if let CourseIdResolution::Degraded { id, reason } = &resolution {
            tracing::warn!(course_id = %id, reason = %reason, "course id degraded to filename slug");
        }
        let course_id = resolution.into_id();

        let data = tokio::fs::read(pdf.path())
            .await
            .map_err(|e| DocumentError::Read(e.to_string()))?;

        let text = self.extractor.extract_text(&data, pdf).await?;

        // Upload and save are both attempted even when one fails, so a
        // storage outage still leaves the extracted text indexed (and vice
        // versa). The document only counts as succeeded when both landed.
        let upload_result = self
            .storage
            .upload(&course_id.storage_key(), Bytes::from(data), PDF_CONTENT_TYPE)
            .await;
        if let Err(error) = &upload_result {
            tracing::error!(course_id = %course_id, error = %error, "storage upload failed");
        }

        let save_result = self.save_content(&course_id, &text).await;
        if let Err(error) = &save_result {
            tracing::error!(course_id = %course_id, error = %error, "content save failed");
        }

        match (upload_result, save_result) {
            (Ok(()), Ok(())) => Ok(course_id),
            (Err(error), _) => Err(error.into()),
            (_, Err(error)) => Err(error.into()),
        }
    }

    async fn save_content(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError> {
        if self.repository.find(course_id).await?.is_some() {
            self.repository.update(course_id, content).await
        } else {
            self.repository.insert(course_id, content).await
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn any_failed(&self) -> bool {
        self.failed > 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("file read: {0}")]
    Read(String),
    #[error("text extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("storage: {0}")]
    Storage(#[from] ObjectStorageError),
    #[error("database: {0}")]
    Database(#[from] ContentRepositoryError),
}

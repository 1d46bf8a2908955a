use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::SourcePdf;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(60);

/// Extracts per-page text with lopdf. Pages that fail to decode are logged
/// and skipped; a document where every page fails (or yields nothing) is
/// reported as having no text.
#[derive(Default)]
pub struct LopdfExtractor;

struct PageContent {
    page_number: u32,
    text: String,
}

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<PageContent>, TextExtractorError> {
        let doc = Document::load_mem(data)
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();
        for page_number in doc.get_pages().keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(text) => {
                    if !text.trim().is_empty() {
                        pages.push(PageContent {
                            page_number: *page_number,
                            text,
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!(page_number, error = %e, "skipping page, text extraction failed");
                }
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for LopdfExtractor {
    #[tracing::instrument(skip(self, data), fields(filename = %pdf.file_name()))]
    async fn extract_text(
        &self,
        data: &[u8],
        pdf: &SourcePdf,
    ) -> Result<String, TextExtractorError> {
        let owned = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        if pages.is_empty() {
            return Err(TextExtractorError::NoTextFound(pdf.file_name()));
        }

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let mut text = String::new();
        for page in &pages {
            text.push_str(&format!(
                "\n--- Page {} ---\n{}\n",
                page.page_number, page.text
            ));
        }

        Ok(text.trim().to_string())
    }
}

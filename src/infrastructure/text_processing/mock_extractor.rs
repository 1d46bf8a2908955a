use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::SourcePdf;

/// Test double returning canned text, or `NoTextFound` when constructed
/// empty.
pub struct MockTextExtractor {
    text: Option<String>,
}

impl MockTextExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn empty() -> Self {
        Self { text: None }
    }
}

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract_text(
        &self,
        _data: &[u8],
        pdf: &SourcePdf,
    ) -> Result<String, TextExtractorError> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(TextExtractorError::NoTextFound(pdf.file_name())),
        }
    }
}

mod preview_service;
mod upload_service;

pub use preview_service::{build_preview, PreviewReport, PreviewSample, SAMPLE_LIMIT};
pub use upload_service::{BatchSummary, DocumentError, UploadService};

use std::sync::Arc;

use anyhow::Context;

use cartable::application::services::UploadService;
use cartable::config::Settings;
use cartable::infrastructure::fs::scan_pdfs;
use cartable::infrastructure::observability::{init_tracing, TracingConfig};
use cartable::infrastructure::persistence::SupabaseContentRepository;
use cartable::infrastructure::storage::ObjectStorageFactory;
use cartable::infrastructure::text_processing::LopdfExtractor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default());

    let settings = Settings::from_env()?;

    let pdf_files = match scan_pdfs(&settings.content_dir) {
        Ok(files) if !files.is_empty() => files,
        Ok(_) => {
            tracing::error!(
                dir = %settings.content_dir.display(),
                "no PDF files found, add course PDFs to the content directory"
            );
            std::process::exit(1);
        }
        Err(error) => {
            tracing::error!(error = %error, "cannot scan content directory");
            std::process::exit(1);
        }
    };
    tracing::info!(count = pdf_files.len(), "found PDF files");

    let supabase = settings
        .supabase
        .clone()
        .context("SUPABASE_URL and SUPABASE_SERVICE_KEY must be set")?;

    let storage = ObjectStorageFactory::create(&settings)?;
    if let Err(error) = storage.ensure_bucket().await {
        // Usually means the bucket already exists under another owner role.
        tracing::info!(error = %error, "bucket setup incomplete, continuing");
    }

    let repository = Arc::new(SupabaseContentRepository::new(
        &supabase.url,
        &supabase.service_key,
        &settings.table,
    ));
    let extractor = Arc::new(LopdfExtractor::new());

    let service = UploadService::new(extractor, storage, repository);
    let summary = service.run(&settings.content_dir, &pdf_files).await;

    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "upload run complete"
    );

    if summary.any_failed() {
        std::process::exit(1);
    }

    Ok(())
}

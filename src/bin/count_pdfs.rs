use cartable::application::services::{build_preview, SAMPLE_LIMIT};
use cartable::config::Settings;
use cartable::domain::CourseIdResolution;
use cartable::infrastructure::fs::scan_pdfs;
use cartable::infrastructure::observability::{init_tracing, TracingConfig};

fn main() -> anyhow::Result<()> {
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

    let report = build_preview(&settings.content_dir, &pdf_files);

    println!("Found {} PDF files", report.total);
    println!();
    println!("Summary by folder:");
    for (folder, count) in &report.by_folder {
        println!("  {folder}: {count} files");
    }

    println!();
    println!("First {} course id examples:", report.samples.len());
    for sample in &report.samples {
        match &sample.resolution {
            CourseIdResolution::Resolved(id) => {
                println!("  {} -> {}", sample.file_name, id);
            }
            CourseIdResolution::Degraded { id, reason } => {
                println!("  {} -> {} (degraded: {})", sample.file_name, id, reason);
            }
        }
    }
    if report.total > SAMPLE_LIMIT {
        println!("  ... and {} more files", report.total - SAMPLE_LIMIT);
    }

    Ok(())
}

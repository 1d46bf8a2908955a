use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::SourcePdf;

/// Recursively enumerate every `.pdf` file under `root_dir`, sorted by path
/// so repeated runs process documents in the same order.
pub fn scan_pdfs(root_dir: &Path) -> Result<Vec<SourcePdf>, ScanError> {
    if !root_dir.is_dir() {
        return Err(ScanError::RootNotFound(root_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ScanError::Walk(e.to_string()))?;
        if entry.file_type().is_file() && has_pdf_extension(entry.path()) {
            files.push(SourcePdf::new(entry.into_path()));
        }
    }

    Ok(files)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("content directory not found: {0}")]
    RootNotFound(PathBuf),
    #[error("directory walk failed: {0}")]
    Walk(String),
}

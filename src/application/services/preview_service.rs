use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{resolve_course_id, CourseIdResolution, SourcePdf};

/// How many derived ids a preview report shows.
pub const SAMPLE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSample {
    pub file_name: String,
    pub resolution: CourseIdResolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewReport {
    pub total: usize,
    pub by_folder: BTreeMap<String, usize>,
    pub samples: Vec<PreviewSample>,
}

/// Dry-run view of a batch: per-folder counts plus the first few course ids
/// that an upload run would derive. Pure over the scanned file list, no I/O.
pub fn build_preview(root_dir: &Path, pdf_files: &[SourcePdf]) -> PreviewReport {
    let mut by_folder: BTreeMap<String, usize> = BTreeMap::new();
    for pdf in pdf_files {
        *by_folder.entry(pdf.folder_name()).or_default() += 1;
    }

    let samples = pdf_files
        .iter()
        .take(SAMPLE_LIMIT)
        .map(|pdf| PreviewSample {
            file_name: pdf.file_name(),
            resolution: resolve_course_id(pdf.path(), root_dir),
        })
        .collect();

    PreviewReport {
        total: pdf_files.len(),
        by_folder,
        samples,
    }
}

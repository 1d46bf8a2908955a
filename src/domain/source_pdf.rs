use std::path::{Path, PathBuf};

/// A PDF file discovered under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePdf {
    path: PathBuf,
}

impl SourcePdf {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Filename without the `.pdf` extension.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Name of the immediate parent directory.
    pub fn folder_name(&self) -> String {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

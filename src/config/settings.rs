use std::path::PathBuf;

const DEFAULT_CONTENT_DIR: &str = "contenu";
const DEFAULT_BUCKET: &str = "course-pdfs";
const DEFAULT_TABLE: &str = "course_contents";
const DEFAULT_LOCAL_STORAGE_PATH: &str = ".cartable/storage";

/// Run configuration, read once from the environment and passed by
/// reference into the batch entry points.
#[derive(Debug, Clone)]
pub struct Settings {
    pub content_dir: PathBuf,
    pub bucket: String,
    pub table: String,
    pub storage_backend: StorageBackend,
    pub local_storage_path: String,
    /// Absent when SUPABASE_URL / SUPABASE_SERVICE_KEY are unset; the
    /// preview binary runs without credentials.
    pub supabase: Option<SupabaseSettings>,
}

#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    pub service_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Supabase,
    Local,
}

impl TryFrom<String> for StorageBackend {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "supabase" => Ok(Self::Supabase),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "Invalid storage backend: {}. Expected: supabase or local",
                other
            )),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let storage_backend = std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "supabase".to_string())
            .try_into()
            .map_err(SettingsError::InvalidValue)?;

        let supabase = match (
            std::env::var("SUPABASE_URL"),
            std::env::var("SUPABASE_SERVICE_KEY"),
        ) {
            (Ok(url), Ok(service_key)) => Some(SupabaseSettings { url, service_key }),
            _ => None,
        };

        Ok(Self {
            content_dir: std::env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTENT_DIR)),
            bucket: std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            table: std::env::var("CONTENT_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string()),
            storage_backend,
            local_storage_path: std::env::var("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|_| DEFAULT_LOCAL_STORAGE_PATH.to_string()),
            supabase,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    InvalidValue(String),
}

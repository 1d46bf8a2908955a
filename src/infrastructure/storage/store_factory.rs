use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ObjectStorage, ObjectStorageError};
use crate::config::{Settings, StorageBackend};

use super::local_store::LocalObjectStore;
use super::supabase_store::SupabaseObjectStore;

pub struct ObjectStorageFactory;

impl ObjectStorageFactory {
    pub fn create(settings: &Settings) -> Result<Arc<dyn ObjectStorage>, ObjectStorageError> {
        match settings.storage_backend {
            StorageBackend::Supabase => {
                let supabase = settings.supabase.as_ref().ok_or_else(|| {
                    ObjectStorageError::BucketSetupFailed(
                        "SUPABASE_URL and SUPABASE_SERVICE_KEY required for the supabase backend"
                            .to_string(),
                    )
                })?;
                Ok(Arc::new(SupabaseObjectStore::new(
                    &supabase.url,
                    &supabase.service_key,
                    &settings.bucket,
                )))
            }
            StorageBackend::Local => {
                let store = LocalObjectStore::new(PathBuf::from(&settings.local_storage_path))?;
                Ok(Arc::new(store))
            }
        }
    }
}

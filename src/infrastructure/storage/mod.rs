mod local_store;
mod mock_store;
mod store_factory;
mod supabase_store;

pub use local_store::LocalObjectStore;
pub use mock_store::MockObjectStorage;
pub use store_factory::ObjectStorageFactory;
pub use supabase_store::SupabaseObjectStore;

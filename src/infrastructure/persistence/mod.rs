mod mock_content_repository;
mod supabase_content_repository;

pub use mock_content_repository::MockContentRepository;
pub use supabase_content_repository::SupabaseContentRepository;

mod content_repository;
mod object_storage;
mod text_extractor;

pub use content_repository::{ContentRepository, ContentRepositoryError, CourseContent};
pub use object_storage::{ObjectStorage, ObjectStorageError};
pub use text_extractor::{TextExtractor, TextExtractorError};

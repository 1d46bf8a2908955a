use async_trait::async_trait;

use crate::domain::CourseId;

/// Row shape of the `course_contents` table, keyed by course id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseContent {
    pub course_id: String,
    pub content: String,
}

/// Keyed access to the course content table. Upsert semantics are composed
/// by the caller (find, then insert or update); the batch runs a single
/// sequential writer so the non-atomic pair is safe.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<CourseContent>, ContentRepositoryError>;

    async fn insert(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError>;

    async fn update(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("query failed: {0}")]
    QueryFailed(String),
}

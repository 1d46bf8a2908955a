use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ContentRepository, ContentRepositoryError, CourseContent};
use crate::domain::CourseId;

/// In-memory course content table, optionally failing every write.
#[derive(Default)]
pub struct MockContentRepository {
    fail_writes: bool,
    rows: Mutex<HashMap<String, String>>,
}

impl MockContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            rows: Mutex::new(HashMap::new()),
        }
    }

    pub fn seeded(course_id: &str, content: &str) -> Self {
        let mut rows = HashMap::new();
        rows.insert(course_id.to_string(), content.to_string());
        Self {
            fail_writes: false,
            rows: Mutex::new(rows),
        }
    }

    pub fn content_of(&self, course_id: &str) -> Option<String> {
        self.rows
            .lock()
            .expect("mock repository lock poisoned")
            .get(course_id)
            .cloned()
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().expect("mock repository lock poisoned").len()
    }
}

#[async_trait]
impl ContentRepository for MockContentRepository {
    async fn find(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<CourseContent>, ContentRepositoryError> {
        Ok(self
            .rows
            .lock()
            .expect("mock repository lock poisoned")
            .get(course_id.as_str())
            .map(|content| CourseContent {
                course_id: course_id.as_str().to_string(),
                content: content.clone(),
            }))
    }

    async fn insert(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError> {
        if self.fail_writes {
            return Err(ContentRepositoryError::QueryFailed("mock failure".to_string()));
        }
        self.rows
            .lock()
            .expect("mock repository lock poisoned")
            .insert(course_id.as_str().to_string(), content.to_string());
        Ok(())
    }

    async fn update(
        &self,
        course_id: &CourseId,
        content: &str,
    ) -> Result<(), ContentRepositoryError> {
        if self.fail_writes {
            return Err(ContentRepositoryError::QueryFailed("mock failure".to_string()));
        }
        self.rows
            .lock()
            .expect("mock repository lock poisoned")
            .insert(course_id.as_str().to_string(), content.to_string());
        Ok(())
    }
}

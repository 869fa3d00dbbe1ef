//! In-memory `CourseRepository` adapter.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseId};

#[derive(Debug, Default)]
struct CourseState {
    last_id: i64,
    courses: BTreeMap<CourseId, Course>,
}

/// Course store kept in process memory; identifiers start at 1.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    state: Mutex<CourseState>,
}

impl InMemoryCourseRepository {
    fn lock(&self) -> Result<MutexGuard<'_, CourseState>, CourseRepositoryError> {
        self.state
            .lock()
            .map_err(|_| CourseRepositoryError::query("course store lock poisoned"))
    }

    /// Register a course and return it with its assigned identifier.
    pub fn insert(&self, name: impl Into<String>) -> Result<Course, CourseRepositoryError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let course = Course::new(CourseId::new(state.last_id), name);
        state.courses.insert(course.id(), course.clone());
        Ok(course)
    }

    /// Number of stored courses.
    pub fn len(&self) -> Result<usize, CourseRepositoryError> {
        Ok(self.lock()?.courses.len())
    }

    /// Whether the store holds no courses.
    pub fn is_empty(&self) -> Result<bool, CourseRepositoryError> {
        Ok(self.lock()?.courses.is_empty())
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.lock()?.courses.get(&id).cloned())
    }

    async fn find_all_by_ids(
        &self,
        ids: &[CourseId],
    ) -> Result<Vec<Course>, CourseRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .courses
            .values()
            .filter(|course| ids.contains(&course.id()))
            .cloned()
            .collect())
    }
}

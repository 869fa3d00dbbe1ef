//! Driving port for read-shaped student queries.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentFilter, StudentId};

/// Domain use-case port for reading students.
#[async_trait]
pub trait StudentDirectoryQuery: Send + Sync {
    /// Return every student.
    async fn list_all(&self) -> Result<Vec<Student>, Error>;

    /// Return the student with the given identifier.
    ///
    /// Fails with `NotFound` (reason `invalid_student_id`) when absent.
    async fn find_by_id(&self, id: StudentId) -> Result<Student, Error>;

    /// Return the students matching an optional course and tenure filter.
    ///
    /// Fails with `NotFound` (reason `invalid_course_id`) when the filter
    /// names a course that does not exist.
    async fn filter(&self, filter: &StudentFilter) -> Result<Vec<Student>, Error>;
}

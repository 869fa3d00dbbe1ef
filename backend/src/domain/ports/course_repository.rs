//! Port abstraction for course lookups.
//!
//! Courses are owned elsewhere; the directory only ever reads them, either one
//! at a time (filtering) or as a batch when resolving a student's requested
//! course identifiers.

use async_trait::async_trait;

use crate::domain::{Course, CourseId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "course repository connection failed: {message}" as ServiceUnavailable,
        /// Query failed during execution.
        Query { message: String } =>
            "course repository query failed: {message}" as InternalError,
    }
}

/// Read access to the course store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Fetch a single course by identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Fetch every course whose identifier appears in `ids`.
    ///
    /// Identifiers that do not resolve are omitted from the result rather
    /// than reported; duplicates in `ids` yield one course.
    async fn find_all_by_ids(&self, ids: &[CourseId])
    -> Result<Vec<Course>, CourseRepositoryError>;
}

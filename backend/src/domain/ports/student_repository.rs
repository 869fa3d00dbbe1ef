//! Port abstraction for student persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{CourseId, EmailAddress, Student, StudentId, StudentProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "student repository connection failed: {message}" as ServiceUnavailable,
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "student repository query failed: {message}" as InternalError,
        /// Another student already uses the email address.
        DuplicateEmail { email: String } =>
            "email already registered: {email}" as InvalidRequest,
    }
}

/// Port for student storage and retrieval.
///
/// Identifier assignment and email uniqueness are the adapter's
/// responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fetch every student in store order.
    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Fetch a student by identifier.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Persist a new student and return it with its assigned identifier.
    async fn insert(&self, profile: StudentProfile) -> Result<Student, StudentRepositoryError>;

    /// Replace the stored student sharing `student`'s identifier.
    async fn save(&self, student: &Student) -> Result<Student, StudentRepositoryError>;

    /// Remove the stored student sharing `student`'s identifier.
    async fn delete(&self, student: &Student) -> Result<(), StudentRepositoryError>;

    /// Fetch every student attending the given course.
    async fn find_by_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Fetch the student registered under `email`.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Student>, StudentRepositoryError>;
}

//! Driving port for student writes.

use async_trait::async_trait;

use crate::domain::{Error, NewStudent, Student, StudentId};

/// Domain use-case port for creating, replacing and removing students.
///
/// Every operation resolves and validates before it writes, so a failure
/// never leaves a partial record behind.
#[async_trait]
pub trait StudentDirectoryCommand: Send + Sync {
    /// Create a student, hashing its password and resolving its courses.
    async fn create(&self, student: NewStudent) -> Result<Student, Error>;

    /// Replace every field of an existing student.
    async fn update(&self, id: StudentId, student: NewStudent) -> Result<Student, Error>;

    /// Remove a student, returning the record as it was before deletion.
    async fn delete(&self, id: StudentId) -> Result<Student, Error>;
}

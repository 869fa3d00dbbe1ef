//! In-memory `StudentRepository` adapter.
//!
//! Enforces email uniqueness, which the domain leaves to persistence.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{CourseId, EmailAddress, Student, StudentId, StudentProfile};

#[derive(Debug, Default)]
struct StudentState {
    last_id: i64,
    students: BTreeMap<StudentId, Student>,
}

impl StudentState {
    fn ensure_email_free(
        &self,
        email: &EmailAddress,
        owner: Option<StudentId>,
    ) -> Result<(), StudentRepositoryError> {
        let taken = self
            .students
            .values()
            .any(|student| student.email() == email && Some(student.id()) != owner);
        if taken {
            return Err(StudentRepositoryError::duplicate_email(email.to_string()));
        }
        Ok(())
    }
}

/// Student store kept in process memory; identifiers start at 1 and list
/// order follows identifier order.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    state: Mutex<StudentState>,
}

impl InMemoryStudentRepository {
    fn lock(&self) -> Result<MutexGuard<'_, StudentState>, StudentRepositoryError> {
        self.state
            .lock()
            .map_err(|_| StudentRepositoryError::query("student store lock poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.lock()?.students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.lock()?.students.get(&id).cloned())
    }

    async fn insert(&self, profile: StudentProfile) -> Result<Student, StudentRepositoryError> {
        let mut state = self.lock()?;
        state.ensure_email_free(&profile.email, None)?;
        state.last_id += 1;
        let student = Student::new(StudentId::new(state.last_id), profile);
        state.students.insert(student.id(), student.clone());
        Ok(student)
    }

    async fn save(&self, student: &Student) -> Result<Student, StudentRepositoryError> {
        let mut state = self.lock()?;
        state.ensure_email_free(student.email(), Some(student.id()))?;
        state.last_id = state.last_id.max(student.id().get());
        state.students.insert(student.id(), student.clone());
        Ok(student.clone())
    }

    async fn delete(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        self.lock()?.students.remove(&student.id());
        Ok(())
    }

    async fn find_by_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self
            .lock()?
            .students
            .values()
            .filter(|student| student.attends(course_id))
            .cloned()
            .collect())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self
            .lock()?
            .students
            .values()
            .find(|student| student.email() == email)
            .cloned())
    }
}

//! Student directory domain service.
//!
//! Implements the read and write driving ports over the student and course
//! repositories. Course resolution and password hashing are delegated to the
//! injected ports; the service only decides what to look up and when to
//! fail.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use mockable::Clock;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    CourseRepository, PasswordHasher, StudentDirectoryCommand, StudentDirectoryQuery,
    StudentRepository,
};
use crate::domain::{
    Course, CourseId, CourseResolution, Error, NewStudent, Student, StudentFilter, StudentId,
    StudentProfile,
};

/// Student directory service implementing the directory driving ports.
#[derive(Clone)]
pub struct StudentDirectoryService<S, C, H> {
    student_repo: Arc<S>,
    course_repo: Arc<C>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
    course_resolution: CourseResolution,
}

impl<S, C, H> StudentDirectoryService<S, C, H> {
    /// Create a service over the given ports.
    ///
    /// Unresolvable course identifiers are dropped until a different policy
    /// is chosen with [`Self::with_course_resolution`].
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use enrollment::domain::StudentDirectoryService;
    /// # use enrollment::outbound::hashing::Argon2PasswordHasher;
    /// # use enrollment::outbound::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
    /// # use mockable::DefaultClock;
    /// let courses = Arc::new(InMemoryCourseRepository::default());
    /// let students = Arc::new(InMemoryStudentRepository::default());
    /// let service = StudentDirectoryService::new(
    ///     students,
    ///     courses,
    ///     Arc::new(Argon2PasswordHasher::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(student_repo: Arc<S>, course_repo: Arc<C>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            student_repo,
            course_repo,
            hasher,
            clock,
            course_resolution: CourseResolution::default(),
        }
    }

    /// Choose how unresolvable course identifiers are treated on writes.
    #[must_use]
    pub fn with_course_resolution(mut self, course_resolution: CourseResolution) -> Self {
        self.course_resolution = course_resolution;
        self
    }

    /// Active course resolution policy.
    pub fn course_resolution(&self) -> CourseResolution {
        self.course_resolution
    }
}

impl<S, C, H> StudentDirectoryService<S, C, H>
where
    S: StudentRepository,
    C: CourseRepository,
    H: PasswordHasher,
{
    fn invalid_student_id(id: StudentId) -> Error {
        Error::not_found(format!("student {id} does not exist"))
            .with_details(json!({ "code": "invalid_student_id", "studentId": id.get() }))
    }

    fn invalid_course_id(id: CourseId) -> Error {
        Error::not_found(format!("course {id} does not exist"))
            .with_details(json!({ "code": "invalid_course_id", "courseId": id.get() }))
    }

    fn current_year(&self) -> i32 {
        self.clock.utc().year()
    }

    async fn require_course(&self, id: CourseId) -> Result<Course, Error> {
        self.course_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::invalid_course_id(id))
    }

    async fn resolve_courses(&self, requested: &[CourseId]) -> Result<Vec<Course>, Error> {
        if requested.is_empty() {
            return Ok(Vec::new());
        }
        let found = self.course_repo.find_all_by_ids(requested).await?;
        self.course_resolution.reconcile(requested, found)
    }

    /// Resolve courses before hashing so a strict rejection skips the hash.
    async fn build_profile(&self, draft: NewStudent) -> Result<StudentProfile, Error> {
        let courses = self.resolve_courses(draft.course_ids()).await?;
        let password_hash = self.hasher.hash(draft.raw_password())?;
        Ok(draft.into_profile(password_hash, courses))
    }
}

#[async_trait]
impl<S, C, H> StudentDirectoryQuery for StudentDirectoryService<S, C, H>
where
    S: StudentRepository,
    C: CourseRepository,
    H: PasswordHasher,
{
    async fn list_all(&self) -> Result<Vec<Student>, Error> {
        let students = self.student_repo.find_all().await?;
        debug!(count = students.len(), "listed students");
        Ok(students)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Student, Error> {
        self.student_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::invalid_student_id(id))
    }

    async fn filter(&self, filter: &StudentFilter) -> Result<Vec<Student>, Error> {
        let candidates = match filter.course_id {
            None => self.student_repo.find_all().await?,
            Some(course_id) => {
                let course = self.require_course(course_id).await?;
                self.student_repo.find_by_course(course.id()).await?
            }
        };

        if filter.years_of_studying.is_none() {
            return Ok(candidates);
        }

        let current_year = self.current_year();
        let matched: Vec<Student> = candidates
            .into_iter()
            .filter(|student| filter.matches_tenure(student, current_year))
            .collect();
        debug!(
            course_id = ?filter.course_id,
            years_of_studying = ?filter.years_of_studying,
            current_year,
            count = matched.len(),
            "filtered students"
        );
        Ok(matched)
    }
}

#[async_trait]
impl<S, C, H> StudentDirectoryCommand for StudentDirectoryService<S, C, H>
where
    S: StudentRepository,
    C: CourseRepository,
    H: PasswordHasher,
{
    async fn create(&self, student: NewStudent) -> Result<Student, Error> {
        let profile = self.build_profile(student).await?;
        let created = self.student_repo.insert(profile).await?;
        debug!(student_id = %created.id(), "created student");
        Ok(created)
    }

    async fn update(&self, id: StudentId, student: NewStudent) -> Result<Student, Error> {
        let mut existing = StudentDirectoryQuery::find_by_id(self, id).await?;
        let profile = self.build_profile(student).await?;
        existing.replace_profile(profile);
        let saved = self.student_repo.save(&existing).await?;
        debug!(student_id = %saved.id(), "updated student");
        Ok(saved)
    }

    async fn delete(&self, id: StudentId) -> Result<Student, Error> {
        let existing = StudentDirectoryQuery::find_by_id(self, id).await?;
        self.student_repo.delete(&existing).await?;
        debug!(student_id = %existing.id(), "deleted student");
        Ok(existing)
    }
}

#[cfg(test)]
#[path = "student_directory_service_tests.rs"]
mod tests;

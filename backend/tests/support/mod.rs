//! Shared wiring for integration tests over the in-memory adapters.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use enrollment::domain::{CourseResolution, StudentDirectoryService};
use enrollment::outbound::hashing::Argon2PasswordHasher;
use enrollment::outbound::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
use mockable::Clock;

pub type Directory = StudentDirectoryService<
    InMemoryStudentRepository,
    InMemoryCourseRepository,
    Argon2PasswordHasher,
>;

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Stores and services sharing one set of in-memory adapters.
pub struct Harness {
    pub courses: Arc<InMemoryCourseRepository>,
    pub students: Arc<InMemoryStudentRepository>,
    pub hasher: Arc<Argon2PasswordHasher>,
    pub directory: Directory,
}

impl Harness {
    /// Build a harness whose clock reads mid-`year`.
    pub fn in_year(year: i32, course_resolution: CourseResolution) -> Self {
        let now = Utc
            .with_ymd_and_hms(year, 6, 15, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        let courses = Arc::new(InMemoryCourseRepository::default());
        let students = Arc::new(InMemoryStudentRepository::default());
        let hasher = Arc::new(Argon2PasswordHasher);
        let directory = StudentDirectoryService::new(
            Arc::clone(&students),
            Arc::clone(&courses),
            Arc::clone(&hasher),
            Arc::new(FixedClock(now)),
        )
        .with_course_resolution(course_resolution);
        Self {
            courses,
            students,
            hasher,
            directory,
        }
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

//! Startup seeding orchestration.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{CourseRepositoryError, StudentDirectoryCommand};
use crate::domain::{CourseId, NewStudent, StudentValidationError};
use crate::outbound::memory::InMemoryCourseRepository;
use crate::seed::fixture::SeedFixture;
use crate::settings::EnrollmentSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Fixture file could not be read.
    #[error("failed to read seed fixture at {path}: {source}")]
    FixtureRead {
        /// Path to the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Fixture contents are not a valid seed document.
    #[error("failed to parse seed fixture at {path}: {source}")]
    FixtureParse {
        /// Path to the fixture file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Two course entries share a name.
    #[error("course {name:?} is declared more than once")]
    DuplicateCourse {
        /// Repeated course name.
        name: String,
    },
    /// A student names a course the fixture does not declare.
    #[error("student {email} references undeclared course {course:?}")]
    UnknownCourse {
        /// Email of the offending student entry.
        email: String,
        /// Course name that did not match.
        course: String,
    },
    /// Two student entries normalise to the same email.
    #[error("student {email} is declared more than once")]
    DuplicateStudent {
        /// Normalised email shared by the entries.
        email: String,
    },
    /// A student entry failed validation.
    #[error("student {email} is invalid: {source}")]
    InvalidStudent {
        /// Email of the offending student entry, as written.
        email: String,
        /// Validation failure.
        #[source]
        source: StudentValidationError,
    },
    /// The course store rejected an insert.
    #[error("course store error: {0}")]
    CourseStore(#[from] CourseRepositoryError),
    /// The directory rejected a student.
    #[error("student directory error: {0}")]
    Directory(#[from] crate::domain::Error),
}

/// Counts of records created by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Courses inserted into the course store.
    pub course_count: usize,
    /// Students created through the directory.
    pub student_count: usize,
}

/// Apply the seed fixture on startup when enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// use enrollment::domain::StudentDirectoryService;
/// use enrollment::outbound::hashing::Argon2PasswordHasher;
/// use enrollment::outbound::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
/// use enrollment::seed::seed_directory_on_startup;
/// use enrollment::settings::EnrollmentSettings;
/// use mockable::DefaultClock;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = EnrollmentSettings {
///     strict_course_resolution: false,
///     seed_enabled: true,
///     seed_path: Some(PathBuf::from("fixtures/seed.json")),
/// };
/// let courses = Arc::new(InMemoryCourseRepository::default());
/// let directory = StudentDirectoryService::new(
///     Arc::new(InMemoryStudentRepository::default()),
///     Arc::clone(&courses),
///     Arc::new(Argon2PasswordHasher),
///     Arc::new(DefaultClock),
/// );
/// let outcome = seed_directory_on_startup(&settings, &courses, &directory).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_directory_on_startup<D>(
    settings: &EnrollmentSettings,
    courses: &InMemoryCourseRepository,
    directory: &D,
) -> Result<Option<SeedOutcome>, StartupSeedingError>
where
    D: StudentDirectoryCommand,
{
    if !settings.seed_enabled {
        info!(reason = "disabled", "directory seeding skipped");
        return Ok(None);
    }

    let seed_path = settings.seed_path();
    let fixture = load_fixture(&seed_path)?;
    let outcome = apply_fixture(&fixture, courses, directory).await?;
    info!(
        path = %seed_path.display(),
        course_count = outcome.course_count,
        student_count = outcome.student_count,
        "directory seeding applied"
    );
    Ok(Some(outcome))
}

/// Insert the fixture's courses, then create its students through the
/// directory so passwords are hashed and courses resolved.
///
/// Course references, student fields and email uniqueness within the fixture
/// are checked before anything is written. Stores are expected to start
/// empty; a clash with a pre-existing student still fails mid-run.
pub async fn apply_fixture<D>(
    fixture: &SeedFixture,
    courses: &InMemoryCourseRepository,
    directory: &D,
) -> Result<SeedOutcome, StartupSeedingError>
where
    D: StudentDirectoryCommand,
{
    check_course_references(fixture)?;
    let drafts = validate_students(fixture)?;

    let mut course_ids: BTreeMap<&str, CourseId> = BTreeMap::new();
    for seed in &fixture.courses {
        let course = courses.insert(seed.name.as_str())?;
        course_ids.insert(seed.name.as_str(), course.id());
    }

    for (seed, draft) in fixture.students.iter().zip(drafts) {
        let ids = seed
            .courses
            .iter()
            .filter_map(|name| course_ids.get(name.as_str()).copied())
            .collect();
        let student = directory.create(draft.with_course_ids(ids)).await?;
        debug!(student_id = %student.id(), "seeded student");
    }

    Ok(SeedOutcome {
        course_count: fixture.courses.len(),
        student_count: fixture.students.len(),
    })
}

/// Build a draft per student entry, rejecting invalid fields and repeated
/// emails. Course identifiers are attached once the courses exist.
fn validate_students(fixture: &SeedFixture) -> Result<Vec<NewStudent>, StartupSeedingError> {
    let mut seen = BTreeSet::new();
    let mut drafts = Vec::with_capacity(fixture.students.len());
    for seed in &fixture.students {
        let draft = NewStudent::try_new(
            &seed.name,
            &seed.email,
            &seed.password,
            seed.student_type,
            Vec::new(),
            seed.enrollment_date,
        )
        .map_err(|source| StartupSeedingError::InvalidStudent {
            email: seed.email.clone(),
            source,
        })?;
        let email = draft.email().to_string();
        if seen.contains(&email) {
            return Err(StartupSeedingError::DuplicateStudent { email });
        }
        seen.insert(email);
        drafts.push(draft);
    }
    Ok(drafts)
}

fn check_course_references(fixture: &SeedFixture) -> Result<(), StartupSeedingError> {
    let mut declared = BTreeSet::new();
    for seed in &fixture.courses {
        if !declared.insert(seed.name.as_str()) {
            return Err(StartupSeedingError::DuplicateCourse {
                name: seed.name.clone(),
            });
        }
    }

    for student in &fixture.students {
        if let Some(course) = student
            .courses
            .iter()
            .find(|name| !declared.contains(name.as_str()))
        {
            return Err(StartupSeedingError::UnknownCourse {
                email: student.email.clone(),
                course: course.clone(),
            });
        }
    }
    Ok(())
}

fn read_error(path: &Path, source: std::io::Error) -> StartupSeedingError {
    StartupSeedingError::FixtureRead {
        path: path.to_path_buf(),
        source,
    }
}

fn load_fixture(path: &Path) -> Result<SeedFixture, StartupSeedingError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "seed path must be a file",
            ),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(|source| read_error(path, source))?;
    SeedFixture::from_json(&contents).map_err(|source| StartupSeedingError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;

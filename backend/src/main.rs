//! Backend entry-point: wires adapters and services, then seeds the directory.

use std::sync::Arc;

use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use enrollment::domain::ports::StudentDirectoryQuery;
use enrollment::domain::StudentDirectoryService;
use enrollment::outbound::hashing::Argon2PasswordHasher;
use enrollment::outbound::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
use enrollment::seed::seed_directory_on_startup;
use enrollment::settings::EnrollmentSettings;

/// Application bootstrap.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = EnrollmentSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let courses = Arc::new(InMemoryCourseRepository::default());
    let students = Arc::new(InMemoryStudentRepository::default());
    let hasher = Arc::new(Argon2PasswordHasher);
    let directory = StudentDirectoryService::new(
        students,
        Arc::clone(&courses),
        hasher,
        Arc::new(DefaultClock),
    )
    .with_course_resolution(settings.course_resolution());

    seed_directory_on_startup(&settings, &courses, &directory)
        .await
        .map_err(std::io::Error::other)?;

    let listed = directory
        .list_all()
        .await
        .map_err(std::io::Error::other)?;
    info!(
        student_count = listed.len(),
        course_resolution = ?directory.course_resolution(),
        "student directory ready"
    );
    for student in &listed {
        debug!(
            student_id = %student.id(),
            role = %student.student_type().role(),
            course_count = student.courses().len(),
            "directory entry"
        );
    }
    Ok(())
}

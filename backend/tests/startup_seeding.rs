//! Seeds the bundled fixture and queries the resulting directory.

use std::sync::Arc;

use enrollment::domain::ports::{LoginService, StudentDirectoryQuery};
use enrollment::domain::{
    CourseId, CourseResolution, LoginCredentials, StudentCredentialService, StudentFilter,
    StudentLoginService,
};
use enrollment::seed::{SeedOutcome, seed_directory_on_startup};
use enrollment::settings::EnrollmentSettings;

mod support;

use support::Harness;

#[tokio::test]
async fn bundled_fixture_seeds_a_queryable_directory() {
    let harness = Harness::in_year(2023, CourseResolution::Strict);
    let settings = EnrollmentSettings {
        strict_course_resolution: true,
        seed_enabled: true,
        seed_path: None,
    };

    let outcome = seed_directory_on_startup(&settings, &harness.courses, &harness.directory)
        .await
        .expect("seeding applied");
    assert_eq!(
        outcome,
        Some(SeedOutcome {
            course_count: 4,
            student_count: 4
        })
    );

    // Course 4 is "Distributed Systems".
    let distributed = harness
        .directory
        .filter(&StudentFilter::default().with_course(CourseId::new(4)))
        .await
        .expect("filter by course");
    let emails: Vec<&str> = distributed.iter().map(|s| s.email().as_ref()).collect();
    assert_eq!(
        emails,
        vec!["grace.hopper@example.org", "edsger.dijkstra@example.org"]
    );

    let veterans = harness
        .directory
        .filter(&StudentFilter::default().with_years_of_studying(3))
        .await
        .expect("filter by tenure");
    assert_eq!(veterans.len(), 2);

    let lookup = Arc::new(StudentCredentialService::new(Arc::clone(&harness.students)));
    let login = StudentLoginService::new(lookup, Arc::clone(&harness.hasher));
    let admin = login
        .authenticate(
            &LoginCredentials::try_from_parts("ada.lovelace@example.org", "analytical-engine")
                .expect("credentials shape"),
        )
        .await
        .expect("seeded admin logs in");
    assert_eq!(admin.role, "ROLE_ADMIN");
}

//! End-to-end coverage of the student directory over in-memory stores.

use enrollment::domain::ports::{PasswordHasher, StudentDirectoryCommand, StudentDirectoryQuery};
use enrollment::domain::{
    CourseId, CourseResolution, ErrorCode, NewStudent, StudentFilter, StudentId, StudentType,
};
use enrollment::outbound::hashing::Argon2PasswordHasher;
use rstest::{fixture, rstest};

mod support;

use support::{Harness, date};

fn draft(name: &str, email: &str, courses: &[i64], enrolled: (i32, u32, u32)) -> NewStudent {
    NewStudent::try_new(
        name,
        email,
        "correct horse",
        StudentType::Undergraduate,
        courses.iter().copied().map(CourseId::new).collect(),
        date(enrolled.0, enrolled.1, enrolled.2),
    )
    .expect("valid draft")
}

#[fixture]
fn harness() -> Harness {
    let harness = Harness::in_year(2023, CourseResolution::Lenient);
    for name in ["Algebra", "Databases", "Compilers"] {
        harness.courses.insert(name).expect("insert course");
    }
    harness
}

#[rstest]
#[tokio::test]
async fn created_student_can_be_found_with_hashed_password(harness: Harness) {
    let created = harness
        .directory
        .create(draft("Ada Lovelace", "Ada@Example.org", &[1, 2], (2019, 1, 1)))
        .await
        .expect("create student");

    let found = harness
        .directory
        .find_by_id(created.id())
        .await
        .expect("find student");
    assert_eq!(found, created);
    assert_eq!(found.email().as_ref(), "ada@example.org");
    assert_ne!(found.password_hash().as_str(), "correct horse");
    assert!(Argon2PasswordHasher.verify("correct horse", found.password_hash()));
    let names: Vec<&str> = found.courses().iter().map(|course| course.name()).collect();
    assert_eq!(names, vec!["Algebra", "Databases"]);
}

#[rstest]
#[tokio::test]
async fn lenient_create_keeps_resolvable_subset(harness: Harness) {
    let created = harness
        .directory
        .create(draft("Ada", "ada@example.org", &[1, 99, 3], (2020, 9, 1)))
        .await
        .expect("create student");
    let ids: Vec<i64> = created.courses().iter().map(|c| c.id().get()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[rstest]
#[tokio::test]
async fn strict_create_rejects_mixed_ids_without_saving() {
    let harness = Harness::in_year(2023, CourseResolution::Strict);
    harness.courses.insert("Algebra").expect("insert course");

    let err = harness
        .directory
        .create(draft("Ada", "ada@example.org", &[1, 99], (2020, 9, 1)))
        .await
        .expect_err("unknown course id");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.reason(), Some("invalid_course_id"));
    assert!(harness.directory.list_all().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_an_invalid_request(harness: Harness) {
    harness
        .directory
        .create(draft("Ada", "ada@example.org", &[], (2020, 9, 1)))
        .await
        .expect("first create");
    let err = harness
        .directory
        .create(draft("Ada Again", "ADA@example.org", &[], (2021, 9, 1)))
        .await
        .expect_err("duplicate email");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_replaces_every_field_and_keeps_identifier(harness: Harness) {
    let created = harness
        .directory
        .create(draft("Ada", "ada@example.org", &[1], (2019, 1, 1)))
        .await
        .expect("create student");
    let replacement = NewStudent::try_new(
        "Ada King",
        "countess@example.org",
        "new password",
        StudentType::Master,
        vec![CourseId::new(3)],
        date(2021, 10, 1),
    )
    .expect("valid draft");

    let updated = harness
        .directory
        .update(created.id(), replacement)
        .await
        .expect("update student");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.name().as_ref(), "Ada King");
    assert_eq!(updated.email().as_ref(), "countess@example.org");
    assert_eq!(updated.student_type(), StudentType::Master);
    assert_eq!(updated.enrollment_date(), date(2021, 10, 1));
    assert!(updated.attends(CourseId::new(3)));
    assert!(!updated.attends(CourseId::new(1)));
    assert!(harness.hasher.verify("new password", updated.password_hash()));
    assert_eq!(harness.directory.list_all().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn lenient_update_keeps_resolvable_subset(harness: Harness) {
    let created = harness
        .directory
        .create(draft("Ada", "ada@example.org", &[1], (2019, 1, 1)))
        .await
        .expect("create student");

    let updated = harness
        .directory
        .update(created.id(), draft("Ada", "ada@example.org", &[2, 99], (2019, 1, 1)))
        .await
        .expect("update student");

    let ids: Vec<i64> = updated.courses().iter().map(|c| c.id().get()).collect();
    assert_eq!(ids, vec![2]);
    let stored = harness.directory.find_by_id(created.id()).await.expect("find");
    assert_eq!(stored, updated);
}

#[rstest]
#[tokio::test]
async fn strict_update_leaves_stored_record_untouched() {
    let harness = Harness::in_year(2023, CourseResolution::Strict);
    harness.courses.insert("Algebra").expect("insert course");
    harness.courses.insert("Databases").expect("insert course");
    let created = harness
        .directory
        .create(draft("Ada", "ada@example.org", &[1], (2019, 1, 1)))
        .await
        .expect("create student");

    let err = harness
        .directory
        .update(created.id(), draft("Ada King", "ada@example.org", &[2, 99], (2021, 1, 1)))
        .await
        .expect_err("unknown course id");

    assert_eq!(err.reason(), Some("invalid_course_id"));
    let stored = harness.directory.find_by_id(created.id()).await.expect("find");
    assert_eq!(stored, created);
}

#[rstest]
#[tokio::test]
async fn missing_student_reports_invalid_student_id(harness: Harness) {
    let err = harness
        .directory
        .update(StudentId::new(42), draft("Ada", "ada@example.org", &[], (2020, 1, 1)))
        .await
        .expect_err("no such student");
    assert_eq!(err.reason(), Some("invalid_student_id"));

    let err = harness
        .directory
        .delete(StudentId::new(42))
        .await
        .expect_err("no such student");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_returns_snapshot_and_removes_record(harness: Harness) {
    let created = harness
        .directory
        .create(draft("Ada", "ada@example.org", &[2], (2020, 1, 1)))
        .await
        .expect("create student");

    let deleted = harness.directory.delete(created.id()).await.expect("delete");
    assert_eq!(deleted, created);
    let err = harness
        .directory
        .find_by_id(created.id())
        .await
        .expect_err("deleted student");
    assert_eq!(err.reason(), Some("invalid_student_id"));
}

#[rstest]
#[case(None, None, &["early", "late", "recent"])]
#[case(None, Some(3), &["early"])]
#[case(None, Some(4), &[])]
#[case(Some(2), None, &["early", "recent"])]
#[case(Some(2), Some(2), &["early"])]
#[case(Some(3), None, &[])]
#[tokio::test]
async fn filter_combines_course_and_tenure(
    harness: Harness,
    #[case] course: Option<i64>,
    #[case] years: Option<i32>,
    #[case] expected: &[&str],
) {
    for (name, courses, enrolled) in [
        ("early", &[1_i64, 2][..], (2019, 1, 1)),
        ("late", &[1][..], (2020, 12, 31)),
        ("recent", &[2][..], (2023, 1, 1)),
    ] {
        harness
            .directory
            .create(draft(name, &format!("{name}@example.org"), courses, enrolled))
            .await
            .expect("create student");
    }

    let filter = StudentFilter::new(course.map(CourseId::new), years);
    let matched = harness.directory.filter(&filter).await.expect("filter");
    let names: Vec<&str> = matched.iter().map(|s| s.name().as_ref()).collect();
    assert_eq!(names, expected);
}

#[rstest]
#[tokio::test]
async fn filter_on_unknown_course_fails(harness: Harness) {
    let err = harness
        .directory
        .filter(&StudentFilter::default().with_course(CourseId::new(99)))
        .await
        .expect_err("unknown course");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.reason(), Some("invalid_course_id"));
}

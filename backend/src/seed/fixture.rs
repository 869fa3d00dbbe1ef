//! Serde model of the seed fixture document.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::StudentType;

/// Courses and students to load into empty stores.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFixture {
    /// Courses to create, in identifier order.
    #[serde(default)]
    pub courses: Vec<CourseSeed>,
    /// Students to create through the directory.
    #[serde(default)]
    pub students: Vec<StudentSeed>,
}

/// Course entry; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseSeed {
    /// Display name, also used by student entries to refer to the course.
    pub name: String,
}

/// Student entry. `courses` names courses declared in the same fixture.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentSeed {
    /// Full name.
    pub name: String,
    /// Login email, normalised when the student is created.
    pub email: String,
    /// Plaintext password; hashed before it is stored.
    pub password: String,
    /// Category, written as `"type"` in the document.
    #[serde(rename = "type")]
    pub student_type: StudentType,
    /// Names of attended courses.
    #[serde(default)]
    pub courses: Vec<String>,
    /// Date the student enrolled, as `YYYY-MM-DD`.
    pub enrollment_date: NaiveDate,
}

impl std::fmt::Debug for StudentSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudentSeed")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("student_type", &self.student_type)
            .field("courses", &self.courses)
            .field("enrollment_date", &self.enrollment_date)
            .finish()
    }
}

impl SeedFixture {
    /// Parse a fixture from its JSON text.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn parses_camel_case_student_entries() {
        let fixture = SeedFixture::from_json(
            r#"{
                "courses": [{ "name": "Algebra" }],
                "students": [{
                    "name": "Ada Lovelace",
                    "email": "ada@example.org",
                    "password": "analytical",
                    "type": "ADMIN",
                    "courses": ["Algebra"],
                    "enrollmentDate": "2019-01-01"
                }]
            }"#,
        )
        .expect("fixture parses");

        assert_eq!(fixture.courses, vec![CourseSeed { name: "Algebra".to_owned() }]);
        let student = &fixture.students[0];
        assert_eq!(student.student_type, StudentType::Admin);
        assert_eq!(student.courses, vec!["Algebra".to_owned()]);
        assert_eq!(
            student.enrollment_date,
            NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid date")
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let fixture = SeedFixture::from_json("{}").expect("fixture parses");
        assert!(fixture.courses.is_empty());
        assert!(fixture.students.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = SeedFixture::from_json(r#"{ "teachers": [] }"#).expect_err("unknown field");
        assert!(err.to_string().contains("teachers"));
    }

    #[test]
    fn debug_redacts_password() {
        let fixture = SeedFixture::from_json(
            r#"{ "students": [{
                "name": "Ada", "email": "ada@example.org", "password": "analytical",
                "type": "MASTER", "enrollmentDate": "2021-09-01"
            }] }"#,
        )
        .expect("fixture parses");
        assert!(!format!("{fixture:?}").contains("analytical"));
    }
}

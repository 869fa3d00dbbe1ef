//! Student data model.
//!
//! A [`Student`] pairs a store-assigned [`StudentId`] with a
//! [`StudentProfile`]. Profiles are always written whole: updates replace
//! every field, so there is no partially-populated student type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::{Course, CourseId};

/// Validation errors returned by student value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    /// Name was blank once trimmed.
    EmptyName,
    /// Email was blank once trimmed.
    EmptyEmail,
    /// Email was not of the form `local@domain`.
    InvalidEmail,
    /// Raw password was empty.
    EmptyPassword,
    /// Student type did not name a known category.
    UnknownStudentType {
        /// Rejected input.
        value: String,
    },
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "student name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like local@domain"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::UnknownStudentType { value } => write!(f, "unknown student type: {value}"),
        }
    }
}

impl std::error::Error for StudentValidationError {}

/// Store-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for StudentId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Student full name.
///
/// ## Invariants
/// - Trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(String);

impl StudentName {
    /// Validate and construct a [`StudentName`].
    pub fn new(name: impl AsRef<str>) -> Result<Self, StudentValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Login email address.
///
/// ## Invariants
/// - Trimmed, lowercased and of the form `local@domain` with both parts
///   non-empty and no embedded whitespace.
///
/// # Examples
/// ```
/// use enrollment::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Ada@Example.org ").unwrap();
/// assert_eq!(email.as_ref(), "ada@example.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    pub fn new(email: impl AsRef<str>) -> Result<Self, StudentValidationError> {
        let trimmed = email.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StudentValidationError::EmptyEmail);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(StudentValidationError::InvalidEmail);
        }
        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_lowercase()))
            }
            _ => Err(StudentValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Opaque one-way password digest.
///
/// `Debug` output is redacted so digests never reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a digest produced by a password hasher.
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Encoded digest.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Category of student; each maps to exactly one authorization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentType {
    /// First-cycle student.
    Undergraduate,
    /// Second-cycle student.
    Master,
    /// Third-cycle student.
    Doctoral,
    /// Administrative account.
    Admin,
}

impl StudentType {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Undergraduate,
        Self::Master,
        Self::Doctoral,
        Self::Admin,
    ];

    /// Uppercase category name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "UNDERGRADUATE",
            Self::Master => "MASTER",
            Self::Doctoral => "DOCTORAL",
            Self::Admin => "ADMIN",
        }
    }

    /// Authorization role granted to students of this category.
    ///
    /// # Examples
    /// ```
    /// use enrollment::domain::StudentType;
    ///
    /// assert_eq!(StudentType::Admin.role(), "ROLE_ADMIN");
    /// ```
    pub fn role(self) -> String {
        format!("ROLE_{}", self.as_str())
    }
}

impl fmt::Display for StudentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentType {
    type Err = StudentValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| StudentValidationError::UnknownStudentType {
                value: value.to_owned(),
            })
    }
}

/// Every stored field of a student except its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    /// Full name.
    pub name: StudentName,
    /// Login identifier.
    pub email: EmailAddress,
    /// Hashed password.
    pub password_hash: PasswordHash,
    /// Category, doubling as role suffix.
    pub student_type: StudentType,
    /// Date the student enrolled.
    pub enrollment_date: NaiveDate,
    /// Courses the student attends; unique by id.
    pub courses: Vec<Course>,
}

/// Persisted student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    profile: StudentProfile,
}

impl Student {
    /// Pair an identifier with a profile.
    pub fn new(id: StudentId, profile: StudentProfile) -> Self {
        Self { id, profile }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Full stored profile.
    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// Full name.
    pub fn name(&self) -> &StudentName {
        &self.profile.name
    }

    /// Login email.
    pub fn email(&self) -> &EmailAddress {
        &self.profile.email
    }

    /// Stored password digest.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.profile.password_hash
    }

    /// Student category.
    pub fn student_type(&self) -> StudentType {
        self.profile.student_type
    }

    /// Enrollment date.
    pub fn enrollment_date(&self) -> NaiveDate {
        self.profile.enrollment_date
    }

    /// Attended courses.
    pub fn courses(&self) -> &[Course] {
        &self.profile.courses
    }

    /// Whether the student attends the given course.
    pub fn attends(&self, course_id: CourseId) -> bool {
        self.profile
            .courses
            .iter()
            .any(|course| course.id() == course_id)
    }

    /// Calendar years between enrollment and `current_year`.
    ///
    /// Year-only arithmetic: a student enrolled on 31 December counts a full
    /// year on 1 January.
    pub fn years_enrolled(&self, current_year: i32) -> i32 {
        current_year - self.profile.enrollment_date.year()
    }

    /// Replace the whole profile, keeping the identifier.
    pub fn replace_profile(&mut self, profile: StudentProfile) {
        self.profile = profile;
    }

    /// Consume the student, yielding its profile.
    pub fn into_profile(self) -> StudentProfile {
        self.profile
    }
}

/// Validated write payload shared by create and update.
///
/// The raw password is held in zeroizing storage and only leaves this type
/// through [`NewStudent::raw_password`] on its way to the hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct NewStudent {
    name: StudentName,
    email: EmailAddress,
    password: Zeroizing<String>,
    student_type: StudentType,
    course_ids: Vec<CourseId>,
    enrollment_date: NaiveDate,
}

impl fmt::Debug for NewStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewStudent")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("student_type", &self.student_type)
            .field("course_ids", &self.course_ids)
            .field("enrollment_date", &self.enrollment_date)
            .finish()
    }
}

impl NewStudent {
    /// Validate raw inputs into a write payload.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use enrollment::domain::{CourseId, NewStudent, StudentType};
    ///
    /// let draft = NewStudent::try_new(
    ///     "Ada Lovelace",
    ///     "ada@example.org",
    ///     "s3cret",
    ///     StudentType::Master,
    ///     vec![CourseId::new(1)],
    ///     NaiveDate::from_ymd_opt(2021, 10, 1).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(draft.email().as_ref(), "ada@example.org");
    /// ```
    pub fn try_new(
        name: &str,
        email: &str,
        password: &str,
        student_type: StudentType,
        course_ids: Vec<CourseId>,
        enrollment_date: NaiveDate,
    ) -> Result<Self, StudentValidationError> {
        let name = StudentName::new(name)?;
        let email = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(StudentValidationError::EmptyPassword);
        }

        Ok(Self {
            name,
            email,
            password: Zeroizing::new(password.to_owned()),
            student_type,
            course_ids,
            enrollment_date,
        })
    }

    /// Replace the requested course identifiers.
    #[must_use]
    pub fn with_course_ids(mut self, course_ids: Vec<CourseId>) -> Self {
        self.course_ids = course_ids;
        self
    }

    /// Full name.
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    /// Login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password to be hashed.
    pub fn raw_password(&self) -> &str {
        self.password.as_str()
    }

    /// Student category.
    pub fn student_type(&self) -> StudentType {
        self.student_type
    }

    /// Requested course identifiers, unresolved.
    pub fn course_ids(&self) -> &[CourseId] {
        &self.course_ids
    }

    /// Enrollment date.
    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    /// Build the stored profile from the hashed password and resolved courses.
    pub fn into_profile(self, password_hash: PasswordHash, courses: Vec<Course>) -> StudentProfile {
        StudentProfile {
            name: self.name,
            email: self.email,
            password_hash,
            student_type: self.student_type,
            enrollment_date: self.enrollment_date,
            courses,
        }
    }
}

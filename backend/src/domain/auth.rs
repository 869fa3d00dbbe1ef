//! Authentication primitives: login credentials and stored credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before an authentication layer talks to a
//! port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::{EmailAddress, PasswordHash, Student};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed and lowercased, and must not be empty.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// The email is not checked for shape here: an address that could never be
/// stored simply fails lookup like any other unknown user.
///
/// # Examples
/// ```
/// use enrollment::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Ada@Example.org", "password").unwrap();
/// assert_eq!(creds.email(), "ada@example.org");
/// assert_eq!(creds.password(), "password");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_lowercase(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for student lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What an authentication layer needs to check a login: the login name, the
/// stored digest and the single granted role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCredential {
    email: EmailAddress,
    password_hash: PasswordHash,
    role: String,
}

impl StudentCredential {
    /// Derive the credential for a stored student.
    pub fn for_student(student: &Student) -> Self {
        Self {
            email: student.email().clone(),
            password_hash: student.password_hash().clone(),
            role: student.student_type().role(),
        }
    }

    /// Login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password digest.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Granted authorization role, e.g. `ROLE_ADMIN`.
    pub fn role(&self) -> &str {
        self.role.as_str()
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedStudent {
    /// Login email.
    pub email: EmailAddress,
    /// Granted authorization role.
    pub role: String,
}

impl From<StudentCredential> for AuthenticatedStudent {
    fn from(value: StudentCredential) -> Self {
        Self {
            email: value.email,
            role: value.role,
        }
    }
}

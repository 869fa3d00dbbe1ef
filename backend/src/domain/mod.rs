//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed student and course entities, the ports the
//! directory depends on, and the services implementing the driving ports.
//! Keep types immutable outside explicit replacement and document invariants
//! in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failures with stable reasons.
//! - Student, StudentProfile, NewStudent, StudentType — the student aggregate.
//! - Course, CourseId — referenced course records.
//! - StudentDirectoryService — CRUD and filtering over students.
//! - StudentCredentialService / StudentLoginService — authentication.

pub mod auth;
pub mod course;
pub mod course_resolution;
pub mod error;
pub mod ports;
pub mod student;
pub mod student_directory_service;
pub mod student_filter;
pub mod student_login_service;

pub use self::auth::{
    AuthenticatedStudent, LoginCredentials, LoginValidationError, StudentCredential,
};
pub use self::course::{Course, CourseId};
pub use self::course_resolution::CourseResolution;
pub use self::error::{Error, ErrorCode};
pub use self::student::{
    EmailAddress, NewStudent, PasswordHash, Student, StudentId, StudentName, StudentProfile,
    StudentType, StudentValidationError,
};
pub use self::student_directory_service::StudentDirectoryService;
pub use self::student_filter::StudentFilter;
pub use self::student_login_service::{StudentCredentialService, StudentLoginService};

//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`]) are implemented by
//! outbound adapters. Driving ports are implemented by domain services and
//! called by whatever fronts the directory.

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod login_service;
mod password_hasher;
mod student_credential_lookup;
mod student_directory_command;
mod student_directory_query;
mod student_repository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
pub use student_credential_lookup::StudentCredentialLookup;
pub use student_directory_command::StudentDirectoryCommand;
pub use student_directory_query::StudentDirectoryQuery;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};

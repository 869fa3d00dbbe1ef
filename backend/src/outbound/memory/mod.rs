//! In-process adapters for the course and student stores.
//!
//! State lives behind a `std::sync::Mutex`; no lock is held across an await
//! point, so the adapters are safe to share across Tokio tasks.

mod course_store;
mod student_store;

pub use course_store::InMemoryCourseRepository;
pub use student_store::InMemoryStudentRepository;

//! Startup seeding of the course and student stores from a JSON fixture.

mod fixture;
mod startup;

pub use fixture::{CourseSeed, SeedFixture, StudentSeed};
pub use startup::{SeedOutcome, StartupSeedingError, apply_fixture, seed_directory_on_startup};

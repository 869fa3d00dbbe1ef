//! Port for one-way password hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hasher adapters.
    pub enum PasswordHasherError {
        /// The digest could not be computed.
        Hashing { message: String } => "password hashing failed: {message}" as InternalError,
    }
}

/// One-way password transformation.
///
/// Hashing is CPU-bound and synchronous. `hash` is used when a student is
/// written; `verify` only by the login service.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a digest for `plaintext`.
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check `plaintext` against a stored digest. Malformed digests never match.
    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool;
}

//! Driving port consumed by authentication layers.
//!
//! Deliberately narrow: it exposes the login name, stored digest and role of
//! a student and nothing of the directory's CRUD surface.

use async_trait::async_trait;

use crate::domain::{Error, StudentCredential};

/// Look up the stored credential for a login email.
#[async_trait]
pub trait StudentCredentialLookup: Send + Sync {
    /// Fails with `NotFound` (reason `unknown_user`) when no student uses
    /// `email`.
    async fn lookup_credential(&self, email: &str) -> Result<StudentCredential, Error>;
}

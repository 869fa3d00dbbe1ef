//! Credential lookup and login services backed by the student store.
//!
//! [`StudentCredentialService`] answers "who is this email?" for any
//! authentication layer. [`StudentLoginService`] is the complete provider:
//! it looks the credential up and checks the candidate password against the
//! stored digest.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    LoginService, PasswordHasher, StudentCredentialLookup, StudentRepository,
};
use crate::domain::{
    AuthenticatedStudent, EmailAddress, Error, ErrorCode, LoginCredentials, StudentCredential,
};

fn unknown_user(email: &str) -> Error {
    Error::not_found(format!("no student registered under {email}"))
        .with_details(json!({ "code": "unknown_user" }))
}

/// Credential lookup over the student repository.
#[derive(Clone)]
pub struct StudentCredentialService<S> {
    student_repo: Arc<S>,
}

impl<S> StudentCredentialService<S> {
    /// Create a lookup service over the student repository.
    pub fn new(student_repo: Arc<S>) -> Self {
        Self { student_repo }
    }
}

#[async_trait]
impl<S> StudentCredentialLookup for StudentCredentialService<S>
where
    S: StudentRepository,
{
    async fn lookup_credential(&self, email: &str) -> Result<StudentCredential, Error> {
        // An address that cannot be stored cannot belong to anyone.
        let Ok(address) = EmailAddress::new(email) else {
            return Err(unknown_user(email));
        };

        let student = self
            .student_repo
            .find_by_email(&address)
            .await?
            .ok_or_else(|| unknown_user(address.as_ref()))?;
        Ok(StudentCredential::for_student(&student))
    }
}

/// Username/password authentication over a credential lookup.
#[derive(Clone)]
pub struct StudentLoginService<L, H> {
    credentials: Arc<L>,
    hasher: Arc<H>,
}

impl<L, H> StudentLoginService<L, H> {
    /// Create a login service from a credential lookup and a hasher.
    pub fn new(credentials: Arc<L>, hasher: Arc<H>) -> Self {
        Self {
            credentials,
            hasher,
        }
    }
}

#[async_trait]
impl<L, H> LoginService for StudentLoginService<L, H>
where
    L: StudentCredentialLookup,
    H: PasswordHasher,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedStudent, Error> {
        let stored = match self.credentials.lookup_credential(credentials.email()).await {
            Ok(stored) => stored,
            Err(err) if err.code() == ErrorCode::NotFound => {
                debug!("login rejected: unknown email");
                return Err(Error::unauthorized("invalid credentials"));
            }
            Err(err) => return Err(err),
        };

        if !self
            .hasher
            .verify(credentials.password(), stored.password_hash())
        {
            debug!(email = %stored.email(), "login rejected: password mismatch");
            return Err(Error::unauthorized("invalid credentials"));
        }

        debug!(email = %stored.email(), role = stored.role(), "login accepted");
        Ok(stored.into())
    }
}

//! Argon2id `PasswordHasher` adapter producing PHC-format digests.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Argon2id hasher with default parameters and a random salt per digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| PasswordHasherError::hashing(err.to_string()))?;
        Ok(PasswordHash::new(digest.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &PasswordHash) -> bool {
        let Ok(parsed) = password_hash::PasswordHash::new(hash.as_str()) else {
            return false;
        };
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        Argon2PasswordHasher::default()
    }

    #[rstest]
    fn correct_password_verifies(hasher: Argon2PasswordHasher) {
        let digest = hasher.hash("secure-password-123").expect("hash password");
        assert!(digest.as_str().starts_with("$argon2"));
        assert!(hasher.verify("secure-password-123", &digest));
    }

    #[rstest]
    fn wrong_password_fails(hasher: Argon2PasswordHasher) {
        let digest = hasher.hash("correct-password").expect("hash password");
        assert!(!hasher.verify("wrong-password", &digest));
    }

    #[rstest]
    fn digests_are_salted(hasher: Argon2PasswordHasher) {
        let first = hasher.hash("same-password").expect("hash password");
        let second = hasher.hash("same-password").expect("hash password");
        assert_ne!(first, second);
        assert!(hasher.verify("same-password", &first));
        assert!(hasher.verify("same-password", &second));
    }

    #[rstest]
    #[case("not-a-valid-hash-string")]
    #[case("")]
    fn malformed_digests_never_match(hasher: Argon2PasswordHasher, #[case] digest: &str) {
        assert!(!hasher.verify("any-password", &PasswordHash::new(digest)));
    }
}

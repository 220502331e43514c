//! Login checks against stored credentials.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use tracing::warn;

use super::store::CredentialStore;

/// Validates login attempts. Read-only: no lockout, no attempt counting.
pub struct Authenticator;

impl Authenticator {
    pub fn new() -> Self {
        Authenticator
    }

    /// True iff the email is known and the password verifies against the
    /// stored hash. Unknown emails, wrong passwords, and malformed stored
    /// hashes all answer false.
    pub fn authenticate(&self, store: &CredentialStore, email: &str, password: &str) -> bool {
        let account = match store.get(email) {
            Some(a) => a,
            None => return false,
        };

        let parsed_hash = match PasswordHash::new(&account.password_hash) {
            Ok(h) => h,
            Err(e) => {
                warn!(email = %email, error = %e, "stored password hash is malformed");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

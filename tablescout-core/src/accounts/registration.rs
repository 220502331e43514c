//! Registration: validates new credentials and creates accounts.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::{AccountError, AccountResult};
use super::store::CredentialStore;
use super::Account;

/// Validates and creates new accounts against a credential store.
pub struct RegistrationService;

impl RegistrationService {
    pub fn new() -> Self {
        RegistrationService
    }

    /// Register a new account.
    ///
    /// Validation failures and duplicate emails leave the store untouched,
    /// in memory and on disk. On success the account is inserted and the
    /// store is persisted before this returns.
    pub fn register(
        &self,
        store: &mut CredentialStore,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> AccountResult<Account> {
        if email.trim().is_empty() {
            return Err(AccountError::Validation("email must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AccountError::Validation("password must not be empty".to_string()));
        }
        if password != confirm_password {
            return Err(AccountError::Validation("passwords do not match".to_string()));
        }
        if store.contains(email) {
            warn!(email = %email, "registration rejected: email already registered");
            return Err(AccountError::DuplicateAccount(email.to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::PasswordHash(e.to_string()))?
            .to_string();

        let account = Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        store.insert(account.clone())?;
        info!(email = %account.email, "account registered");
        Ok(account)
    }
}

impl Default for RegistrationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> CredentialStore {
        CredentialStore::open(dir.path().join("users.json")).unwrap()
    }

    #[test]
    fn test_register_success_stores_hash_not_password() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let service = RegistrationService::new();

        let account = service
            .register(&mut store, "a@x.com", "p1", "p1")
            .unwrap();

        assert_eq!(account.email, "a@x.com");
        assert_ne!(account.password_hash, "p1");
        assert!(account.password_hash.starts_with("$argon2"));
        assert!(store.contains("a@x.com"));
    }

    #[test]
    fn test_register_persists_before_returning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let mut store = CredentialStore::open(&path).unwrap();

        RegistrationService::new()
            .register(&mut store, "a@x.com", "p1", "p1")
            .unwrap();

        // A fresh load of the file already sees the account.
        let reloaded = CredentialStore::open(&path).unwrap();
        assert!(reloaded.contains("a@x.com"));
    }

    #[test]
    fn test_password_mismatch_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let result = RegistrationService::new().register(&mut store, "b@x.com", "p1", "p2");

        assert!(matches!(result, Err(AccountError::Validation(_))));
        assert!(!store.contains("b@x.com"));
        assert!(!dir.path().join("users.json").exists());
    }

    #[test]
    fn test_empty_email_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let result = RegistrationService::new().register(&mut store, "", "p1", "p1");
        assert!(matches!(result, Err(AccountError::Validation(_))));

        let result = RegistrationService::new().register(&mut store, "   ", "p1", "p1");
        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[test]
    fn test_empty_password_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let result = RegistrationService::new().register(&mut store, "a@x.com", "", "");
        assert!(matches!(result, Err(AccountError::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_email_leaves_existing_account_unmodified() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let service = RegistrationService::new();

        let first = service.register(&mut store, "a@x.com", "p1", "p1").unwrap();
        let result = service.register(&mut store, "a@x.com", "p2", "p2");

        match result {
            Err(AccountError::DuplicateAccount(email)) => assert_eq!(email, "a@x.com"),
            other => panic!("expected DuplicateAccount, got {:?}", other.map(|a| a.email)),
        }
        assert_eq!(store.get("a@x.com").unwrap().password_hash, first.password_hash);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_password_hashes_differently_per_account() {
        // Random salts: two accounts with the same password must not share
        // a hash string.
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let service = RegistrationService::new();

        let a = service.register(&mut store, "a@x.com", "p1", "p1").unwrap();
        let b = service.register(&mut store, "b@x.com", "p1", "p1").unwrap();

        assert_ne!(a.password_hash, b.password_hash);
    }
}

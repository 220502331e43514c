//! Email-keyed credential store over a single JSON file.
//!
//! File format: a JSON object whose keys are email addresses and whose
//! values are account records, written pretty-printed. Writes go through
//! a temp file and an atomic rename so a crash mid-write leaves the
//! previous file intact.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{AccountError, AccountResult};
use super::Account;

/// The durable mapping of all known accounts.
pub struct CredentialStore {
    accounts: HashMap<String, Account>,
    path: PathBuf,
}

impl CredentialStore {
    /// Open a store backed by the given file. A missing file yields an
    /// empty store; the file is only created on the first insert.
    pub fn open(path: impl Into<PathBuf>) -> AccountResult<Self> {
        let path = path.into();
        let accounts = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            HashMap::new()
        };
        debug!(path = %path.display(), count = accounts.len(), "credential store opened");
        Ok(CredentialStore { accounts, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, email: &str) -> Option<&Account> {
        self.accounts.get(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.accounts.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterate over all stored accounts, in no particular order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Insert a new account and persist the whole store.
    ///
    /// Fails with `DuplicateAccount` if the email is already present. If
    /// the write fails the in-memory map is rolled back, so memory and
    /// disk never disagree.
    pub fn insert(&mut self, account: Account) -> AccountResult<()> {
        let email = account.email.clone();
        if self.accounts.contains_key(&email) {
            return Err(AccountError::DuplicateAccount(email));
        }

        self.accounts.insert(email.clone(), account);
        if let Err(err) = self.save() {
            self.accounts.remove(&email);
            return Err(err);
        }

        info!(email = %email, "account persisted");
        Ok(())
    }

    /// Write the whole store to disk (temp file, then rename).
    fn save(&self) -> AccountResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(&self.accounts)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, data)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn account(email: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open(dir.path().join("users.json")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let dir = TempDir::new().unwrap();
        let mut store = CredentialStore::open(dir.path().join("users.json")).unwrap();

        store.insert(account("a@x.com")).unwrap();

        assert!(store.contains("a@x.com"));
        assert_eq!(store.get("a@x.com").unwrap().email, "a@x.com");
        assert!(store.get("b@x.com").is_none());
    }

    #[test]
    fn test_insert_duplicate_rejected_and_original_kept() {
        let dir = TempDir::new().unwrap();
        let mut store = CredentialStore::open(dir.path().join("users.json")).unwrap();

        let original = account("a@x.com");
        let original_id = original.id;
        store.insert(original).unwrap();

        let result = store.insert(account("a@x.com"));
        match result {
            Err(AccountError::DuplicateAccount(email)) => assert_eq!(email, "a@x.com"),
            other => panic!("expected DuplicateAccount, got {:?}", other),
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a@x.com").unwrap().id, original_id);
    }

    #[test]
    fn test_round_trip_yields_identical_mapping() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let mut store = CredentialStore::open(&path).unwrap();
        store.insert(account("a@x.com")).unwrap();
        store.insert(account("b@x.com")).unwrap();
        let before: HashMap<String, Account> = store
            .accounts()
            .map(|a| (a.email.clone(), a.clone()))
            .collect();

        let reloaded = CredentialStore::open(&path).unwrap();
        let after: HashMap<String, Account> = reloaded
            .accounts()
            .map(|a| (a.email.clone(), a.clone()))
            .collect();

        assert_eq!(before, after);
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let mut store = CredentialStore::open(&path).unwrap();
        store.insert(account("a@x.com")).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_is_email_keyed_json_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");

        let mut store = CredentialStore::open(&path).unwrap();
        store.insert(account("a@x.com")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_object());
        assert!(value.get("a@x.com").is_some());
        assert!(value["a@x.com"].get("password_hash").is_some());
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{ not json").unwrap();

        let result = CredentialStore::open(&path);
        assert!(matches!(result, Err(AccountError::Serialization(_))));
    }
}

//! Account management: credential storage, registration, and login checks.
//!
//! Accounts are keyed by email and persisted as a single JSON file. The
//! store is loaded once at startup and rewritten in full after every
//! successful registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod auth;
mod error;
mod registration;
mod store;

pub use auth::Authenticator;
pub use error::{AccountError, AccountResult};
pub use registration::RegistrationService;
pub use store::CredentialStore;

/// A stored credential record.
///
/// The password is kept as an Argon2 PHC hash string, never in the clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

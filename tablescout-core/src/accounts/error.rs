//! Account error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("account already registered: {0}")]
    DuplicateAccount(String),

    #[error("invalid email or password")]
    AuthenticationFailed,

    #[error("credential file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

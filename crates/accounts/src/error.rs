//! Account error types.

use thiserror::Error;

/// Errors that can occur during account and session operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The credential or session file could not be read or written.
    #[error("account storage error: {0}")]
    Io(#[from] std::io::Error),

    /// The credential or session file is not valid JSON.
    #[error("account storage is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Username was empty or whitespace.
    #[error("username cannot be empty")]
    UsernameEmpty,

    /// Username was shorter than the minimum length.
    #[error("username must be at least {minimum} characters long")]
    UsernameTooShort { minimum: usize },

    /// Username contained characters other than letters, digits, and
    /// underscores.
    #[error("username can only contain letters, numbers, and underscores")]
    UsernameInvalid,

    /// Username is already taken.
    #[error("username already exists: {username}")]
    UserExists { username: String },

    /// Password was shorter than the minimum length.
    #[error("password must be at least {minimum} characters long")]
    PasswordTooShort { minimum: usize },

    /// Password and confirmation did not match.
    #[error("passwords do not match")]
    PasswordMismatch,
}

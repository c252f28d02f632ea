//! File-backed account store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::AccountError;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 3;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

/// Credential store persisted as a flat JSON map of
/// `username -> sha256-hex`.
///
/// Constructed explicitly with [`AccountStore::load`]; a missing file is
/// bootstrapped with a default `admin` account. Usernames are normalized
/// to lowercase with surrounding whitespace trimmed.
#[derive(Debug)]
pub struct AccountStore {
    path: PathBuf,
    accounts: HashMap<String, String>,
}

impl AccountStore {
    /// Loads the store from the given path, creating it with a default
    /// admin account if the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AccountError> {
        let path = path.into();
        let accounts = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };

        let mut store = Self { path, accounts };
        if store.accounts.is_empty() {
            tracing::info!("no accounts on disk, creating default admin account");
            store
                .accounts
                .insert(DEFAULT_USERNAME.to_string(), hash_password(DEFAULT_PASSWORD));
            store.save()?;
        }
        Ok(store)
    }

    /// Creates a new account and persists the store.
    ///
    /// Validates the username (non-empty, at least three characters,
    /// letters/digits/underscores only, not taken) and the password (at
    /// least three characters, matching its confirmation).
    pub fn create_account(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AccountError> {
        let username = normalize(username);
        if username.is_empty() {
            return Err(AccountError::UsernameEmpty);
        }
        if username.len() < MIN_USERNAME_LEN {
            return Err(AccountError::UsernameTooShort {
                minimum: MIN_USERNAME_LEN,
            });
        }
        if !username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return Err(AccountError::UsernameInvalid);
        }
        if self.accounts.contains_key(&username) {
            return Err(AccountError::UserExists { username });
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AccountError::PasswordTooShort {
                minimum: MIN_PASSWORD_LEN,
            });
        }
        if password != confirm_password {
            return Err(AccountError::PasswordMismatch);
        }

        self.accounts.insert(username, hash_password(password));
        self.save()
    }

    /// Returns true if the username and password match a stored account.
    pub fn validate_login(&self, username: &str, password: &str) -> bool {
        self.accounts
            .get(&normalize(username))
            .is_some_and(|stored| stored == &hash_password(password))
    }

    /// Returns true if an account with the username exists.
    pub fn user_exists(&self, username: &str) -> bool {
        self.accounts.contains_key(&normalize(username))
    }

    /// Returns the number of stored accounts.
    pub fn total_users(&self) -> usize {
        self.accounts.len()
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), AccountError> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.accounts)?)?;
        Ok(())
    }
}

fn normalize(username: &str) -> String {
    username.trim().to_lowercase()
}

/// One SHA-256 round, hex-encoded. Demo-grade on purpose.
fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

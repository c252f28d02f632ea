//! Persisted login session.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AccountError;
use crate::store::AccountStore;

/// How long a persisted session stays valid.
const SESSION_TTL_HOURS: i64 = 24;

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Normalized username.
    pub username: String,

    /// Derived contact address for the mock-mail feature.
    pub email: String,

    /// When the login happened.
    pub logged_in_at: DateTime<Utc>,
}

/// File-backed session holder.
///
/// Constructed explicitly with a path and passed by reference; no global
/// instance. The session file is JSON and expires 24 hours after login.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a session store backed by the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Validates credentials against the account store and, on success,
    /// persists and returns a new session.
    ///
    /// Returns `Ok(None)` on bad credentials.
    pub fn login(
        &self,
        accounts: &AccountStore,
        username: &str,
        password: &str,
    ) -> Result<Option<Session>, AccountError> {
        if !accounts.validate_login(username, password) {
            return Ok(None);
        }

        let username = username.trim().to_lowercase();
        let session = Session {
            email: format!("{username}@ehc.com"),
            username,
            logged_in_at: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;
        Ok(Some(session))
    }

    /// Restores the persisted session if one exists and is still valid.
    ///
    /// A stale or unreadable session file is cleared and reported as no
    /// session rather than an error.
    pub fn restore(&self) -> Result<Option<Session>, AccountError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let session: Session = match serde_json::from_str(&fs::read_to_string(&self.path)?) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session file");
                self.logout()?;
                return Ok(None);
            }
        };

        if Utc::now() - session.logged_in_at < Duration::hours(SESSION_TTL_HOURS) {
            Ok(Some(session))
        } else {
            tracing::info!(username = %session.username, "session expired");
            self.logout()?;
            Ok(None)
        }
    }

    /// Removes the persisted session, if any.
    pub fn logout(&self) -> Result<(), AccountError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn accounts_in(dir: &tempfile::TempDir) -> AccountStore {
        AccountStore::load(dir.path().join("accounts.json")).unwrap()
    }

    fn sessions_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn login_with_valid_credentials_persists_a_session() {
        let dir = tempdir().unwrap();
        let accounts = accounts_in(&dir);
        let sessions = sessions_in(&dir);

        let session = sessions
            .login(&accounts, "Admin", "admin123")
            .unwrap()
            .unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.email, "admin@ehc.com");
        assert!(sessions.path().exists());
    }

    #[test]
    fn login_with_bad_credentials_returns_none() {
        let dir = tempdir().unwrap();
        let accounts = accounts_in(&dir);
        let sessions = sessions_in(&dir);

        assert!(sessions.login(&accounts, "admin", "wrong").unwrap().is_none());
        assert!(!sessions.path().exists());
    }

    #[test]
    fn fresh_session_restores() {
        let dir = tempdir().unwrap();
        let accounts = accounts_in(&dir);
        let sessions = sessions_in(&dir);

        let saved = sessions
            .login(&accounts, "admin", "admin123")
            .unwrap()
            .unwrap();
        let restored = sessions.restore().unwrap().unwrap();
        assert_eq!(restored, saved);
    }

    #[test]
    fn stale_session_is_cleared_on_restore() {
        let dir = tempdir().unwrap();
        let sessions = sessions_in(&dir);

        let stale = Session {
            username: "admin".to_string(),
            email: "admin@ehc.com".to_string(),
            logged_in_at: Utc::now() - Duration::hours(25),
        };
        fs::write(sessions.path(), serde_json::to_string(&stale).unwrap()).unwrap();

        assert!(sessions.restore().unwrap().is_none());
        assert!(!sessions.path().exists());
    }

    #[test]
    fn corrupt_session_file_is_cleared_on_restore() {
        let dir = tempdir().unwrap();
        let sessions = sessions_in(&dir);
        fs::write(sessions.path(), "not json").unwrap();

        assert!(sessions.restore().unwrap().is_none());
        assert!(!sessions.path().exists());
    }

    #[test]
    fn logout_clears_the_session() {
        let dir = tempdir().unwrap();
        let accounts = accounts_in(&dir);
        let sessions = sessions_in(&dir);

        sessions.login(&accounts, "admin", "admin123").unwrap();
        sessions.logout().unwrap();
        assert!(!sessions.path().exists());
        assert!(sessions.restore().unwrap().is_none());

        // Logging out twice is harmless.
        sessions.logout().unwrap();
    }
}

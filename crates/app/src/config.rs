//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `EHC_ACCOUNTS_FILE` — credential file path (default: `.ehc_accounts.json`)
/// - `EHC_SESSION_FILE` — session file path (default: `.ehc_session.json`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub accounts_file: PathBuf,
    pub session_file: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            accounts_file: std::env::var_os("EHC_ACCOUNTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".ehc_accounts.json")),
            session_file: std::env::var_os("EHC_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".ehc_session.json")),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts_file: PathBuf::from(".ehc_accounts.json"),
            session_file: PathBuf::from(".ehc_session.json"),
            log_level: "info".to_string(),
        }
    }
}

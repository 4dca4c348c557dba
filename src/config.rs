//! Configuration constants and utilities for backline
//!
//! Everything here resolves from an environment variable first and falls
//! back to a compiled default, so the binary works out of the box against a
//! local backend.

use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the events platform API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable name for overriding the API base URL
pub const API_BASE_URL_ENV_VAR: &str = "BACKLINE_API_URL";

/// Default directory holding the persisted auth session
pub const DEFAULT_SESSION_DIR: &str = "~/.backline";

/// Environment variable name for overriding the session directory
pub const SESSION_DIR_ENV_VAR: &str = "BACKLINE_SESSION_DIR";

/// Quiet period a search input must hold before a fetch is dispatched
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Upper bound on a single list/mutation request before it is abandoned
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Get the API base URL, checking the environment variable first
pub fn get_api_base_url() -> String {
    std::env::var_os(API_BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Get the session directory with `~` expanded, environment override first
pub fn get_session_dir() -> PathBuf {
    let raw = std::env::var_os(SESSION_DIR_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_SESSION_DIR.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests mutating process-global environment variables must not
    // interleave under the parallel test runner.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_default_api_base_url() {
        assert_eq!(DEFAULT_API_BASE_URL, "http://localhost:8000");
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(API_BASE_URL_ENV_VAR, "BACKLINE_API_URL");
        assert_eq!(SESSION_DIR_ENV_VAR, "BACKLINE_SESSION_DIR");
    }

    #[test]
    fn test_get_api_base_url_default() {
        let _env = env_guard();

        // Save current env var state
        let original = std::env::var_os(API_BASE_URL_ENV_VAR);

        std::env::remove_var(API_BASE_URL_ENV_VAR);
        assert_eq!(get_api_base_url(), DEFAULT_API_BASE_URL);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(API_BASE_URL_ENV_VAR, val);
        }
    }

    #[test]
    fn test_get_session_dir_env_override() {
        let _env = env_guard();

        // Save current env var state
        let original = std::env::var_os(SESSION_DIR_ENV_VAR);

        std::env::set_var(SESSION_DIR_ENV_VAR, "/custom/session/dir");
        assert_eq!(get_session_dir(), PathBuf::from("/custom/session/dir"));

        // Restore original state
        match original {
            Some(val) => std::env::set_var(SESSION_DIR_ENV_VAR, val),
            None => std::env::remove_var(SESSION_DIR_ENV_VAR),
        }
    }

    #[test]
    fn test_get_session_dir_expands_tilde() {
        let _env = env_guard();

        let original = std::env::var_os(SESSION_DIR_ENV_VAR);

        std::env::remove_var(SESSION_DIR_ENV_VAR);
        let dir = get_session_dir();
        assert!(!dir.to_string_lossy().starts_with('~'));

        if let Some(val) = original {
            std::env::set_var(SESSION_DIR_ENV_VAR, val);
        }
    }
}

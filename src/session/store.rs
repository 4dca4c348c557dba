//! Session persistence
//!
//! The session is stored redundantly, mirroring what the dashboard's two
//! consumers need: `session.json` carries the full profile for client-side
//! reads, and a bare `token` file is the cookie-equivalent the route gate
//! consults. Both are written together on login and removed together on
//! logout; a session is only reported when both artifacts agree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::records::LoginResponse;

const SESSION_FILE: &str = "session.json";
const TOKEN_FILE: &str = "token";

/// The logged-in identity, as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user_id: String,
    pub fullname: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

impl From<LoginResponse> for AuthSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            user_id: response.id,
            fullname: response.fullname,
            email: response.email,
            role: response.role,
            token: response.token,
        }
    }
}

/// Read capability over the current session
///
/// Injected into repositories and the gate; nothing reaches into a global.
pub trait SessionAccess: Send + Sync {
    /// The full session, if one is persisted and coherent
    fn current(&self) -> Option<AuthSession>;

    /// Just the bearer token (the gate and repositories need nothing more)
    fn token(&self) -> Option<String>;
}

/// File-backed session store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the configured session directory
    pub fn open_default() -> Self {
        Self::new(config::get_session_dir())
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    /// The single write path: persist both artifacts
    pub fn login(&self, session: &AuthSession) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create session dir {}", self.dir.display()))?;
        let json = serde_json::to_string_pretty(session).context("failed to encode session")?;
        fs::write(self.session_path(), json).context("failed to write session file")?;
        fs::write(self.token_path(), &session.token).context("failed to write token file")?;
        tracing::info!(email = %session.email, "session persisted");
        Ok(())
    }

    /// The single clear path: remove both artifacts
    pub fn logout(&self) -> Result<()> {
        remove_if_present(&self.session_path())?;
        remove_if_present(&self.token_path())?;
        tracing::info!("session cleared");
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}

impl SessionAccess for FileSessionStore {
    fn current(&self) -> Option<AuthSession> {
        let token = self.token()?;
        let json = fs::read_to_string(self.session_path()).ok()?;
        let session: AuthSession = serde_json::from_str(&json).ok()?;
        // The two stores must agree before a session is reported.
        if session.token == token {
            Some(session)
        } else {
            None
        }
    }

    fn token(&self) -> Option<String> {
        let token = fs::read_to_string(self.token_path()).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

//! # Auth Session
//!
//! The persisted login state and everything that consults it: the
//! file-backed session store (one write path on login, one clear path on
//! logout) and the route gate. Components read the session through the
//! [`SessionAccess`] capability instead of an ambient global.

pub mod gate;
pub mod store;

pub use gate::{GateDecision, HOME_PATH, LOGIN_PATH, PROTECTED_PREFIXES};
pub use store::{AuthSession, FileSessionStore, SessionAccess};

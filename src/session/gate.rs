//! Route gating
//!
//! The fixed decision table the dashboard's middleware applied: protected
//! prefixes require a token, and a logged-in visit to the login path goes
//! home instead.

/// Path prefixes that require a valid session
pub const PROTECTED_PREFIXES: [&str; 7] = [
    "/home",
    "/events",
    "/banner",
    "/faq",
    "/user",
    "/category",
    "/event-type",
];

/// Where unauthenticated visitors land
pub const LOGIN_PATH: &str = "/";

/// Where authenticated visitors to the login path are sent
pub const HOME_PATH: &str = "/home";

/// Outcome of gating one request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    RedirectToLogin,
    RedirectToHome,
}

/// Decide what to do with a request to `path` given session presence
pub fn decide(path: &str, has_session: bool) -> GateDecision {
    let is_protected = PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix));

    if is_protected && !has_session {
        return GateDecision::RedirectToLogin;
    }
    if has_session && path == LOGIN_PATH {
        return GateDecision::RedirectToHome;
    }
    GateDecision::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_path_without_session_should_redirect_to_login() {
        assert_eq!(decide("/banner", false), GateDecision::RedirectToLogin);
        assert_eq!(decide("/events/e1", false), GateDecision::RedirectToLogin);
    }

    #[test]
    fn login_path_with_session_should_redirect_home() {
        assert_eq!(decide("/", true), GateDecision::RedirectToHome);
    }

    #[test]
    fn protected_path_with_session_should_proceed() {
        for prefix in PROTECTED_PREFIXES {
            assert_eq!(decide(prefix, true), GateDecision::Proceed);
        }
    }

    #[test]
    fn login_path_without_session_should_proceed() {
        assert_eq!(decide("/", false), GateDecision::Proceed);
    }

    #[test]
    fn unlisted_path_should_proceed_either_way() {
        assert_eq!(decide("/forgotpassword", false), GateDecision::Proceed);
        assert_eq!(decide("/forgotpassword", true), GateDecision::Proceed);
    }
}

// src/pages/guard.rs

//! Client-side route gating on the session token.

use crate::api::Session;

/// Landing page for authenticated users.
pub const HOME_ROUTE: &str = "/homepage";

/// Login view route.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decides whether a route may be shown for the current session.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Session,
    login_route: String,
    home_route: String,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            login_route: LOGIN_ROUTE.to_string(),
            home_route: HOME_ROUTE.to_string(),
        }
    }

    pub fn check(&self, path: &str) -> GuardDecision {
        let path = normalize(path);
        let on_login = path == normalize(&self.login_route);

        match (self.session.is_authenticated(), on_login) {
            (false, false) => GuardDecision::Redirect(self.login_route.clone()),
            (false, true) => GuardDecision::Allow,
            (true, true) => GuardDecision::Redirect(self.home_route.clone()),
            (true, false) if path == "/" => GuardDecision::Redirect(self.home_route.clone()),
            (true, false) => GuardDecision::Allow,
        }
    }
}

/// Strip query, fragment and trailing slashes.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical redirect rules, so the decision is a
//! pure function of the route requirement and the current session. It is
//! re-evaluated on every navigation; nothing is cached.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{Role, Session};

/// Login route used for unauthenticated redirects.
pub const LOGIN_PATH: &str = "/login";

/// Where non-admins land when they hit an admin-only route.
pub const USER_DASHBOARD_PATH: &str = "/dashboard";

/// Access level derived solely from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Unauthenticated,
    User,
    Admin,
}

impl AccessLevel {
    pub fn of(session: Option<&Session>) -> Self {
        match session.map(|s| s.role) {
            None => Self::Unauthenticated,
            Some(Role::User) => Self::User,
            Some(Role::Admin) => Self::Admin,
        }
    }
}

/// What a protected route demands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Any signed-in user.
    Authenticated,
    /// Signed in with the admin role.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session state not known yet; render nothing and do not redirect.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Decide whether a protected view may render for `session`.
pub fn decide(requirement: RouteRequirement, session: Option<&Session>) -> GuardDecision {
    match (requirement, AccessLevel::of(session)) {
        (_, AccessLevel::Unauthenticated) => GuardDecision::Redirect(LOGIN_PATH),
        (RouteRequirement::Admin, AccessLevel::User) => GuardDecision::Redirect(USER_DASHBOARD_PATH),
        _ => GuardDecision::Render,
    }
}

//! Route guards.
//!
//! A guard evaluates a predicate over the current session and either
//! allows navigation or names a redirect. Guards only read the session;
//! they never mutate it.

use chrono::{DateTime, Utc};

use crate::routing::{Destination, route_for_role};
use crate::session::{Session, TokenStore};

/// Predicate a guarded route declares over the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardRequirement {
    IsAuthenticated,
    IsAdmin,
    RoleIs(&'static str),
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Destination),
}

impl GuardRequirement {
    /// Evaluate against the current session; unmet requirements redirect
    /// to the login page.
    pub fn check<S: TokenStore>(&self, session: &Session<S>, now: DateTime<Utc>) -> GuardDecision {
        let met = match self {
            GuardRequirement::IsAuthenticated => session.is_authenticated(now),
            GuardRequirement::IsAdmin => session.is_admin(now),
            GuardRequirement::RoleIs(role) => {
                session.current_role(now).as_deref() == Some(*role)
            }
        };
        if met {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(Destination::Login)
        }
    }
}

/// Guard for the login page itself: an already-authenticated user is sent
/// to their dashboard instead. A user with no routable role stays on the
/// login page (the routing layer logs the warning).
pub fn redirect_if_authenticated<S: TokenStore>(
    session: &Session<S>,
    now: DateTime<Utc>,
) -> GuardDecision {
    match session.claims(now) {
        None => GuardDecision::Allow,
        Some(claims) => {
            match route_for_role(
                claims.role.as_deref(),
                claims.is_admin,
                claims.special_access.as_deref(),
            ) {
                Some(dest) => GuardDecision::Redirect(dest),
                None => GuardDecision::Allow,
            }
        }
    }
}

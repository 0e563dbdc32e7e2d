//! Route guard: decides whether a view may render for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated by the navigation shell on every navigation attempt. There is
//! no cached "authorized" state; a cleared token or changed role takes
//! effect at the next navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{ADMIN_FALLBACK_PATH, LOGIN_PATH};
use crate::state::session::{Role, Session};

/// Permission level a route requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Always renders.
    Public,
    /// Requires a stored token; role is ignored.
    Authenticated,
    /// Requires a stored token and the admin role.
    Admin,
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether a route with `access` may render for `session`.
///
/// Authenticated non-admins hitting an admin route are sent to the admin
/// users path rather than to login.
pub fn guard(access: Access, session: &Session) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Allow,
        Access::Authenticated => {
            if session.is_authenticated() {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(LOGIN_PATH)
            }
        }
        Access::Admin => match (session.is_authenticated(), session.role) {
            (false, _) => GuardDecision::Redirect(LOGIN_PATH),
            (true, Role::Admin) => GuardDecision::Allow,
            (true, Role::User | Role::Guest) => GuardDecision::Redirect(ADMIN_FALLBACK_PATH),
        },
    }
}

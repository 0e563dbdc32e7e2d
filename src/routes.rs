//! Navigation table: path → (permission, view).
//!
//! DESIGN
//! ======
//! The table is data, not router markup, so the full navigation outcome for
//! a path and session can be computed (and tested) without a browser. The
//! Leptos router in `app` mounts one `Gate` per route, and the gate calls
//! `navigate` to decide between rendering and redirecting.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Session;
use crate::util::guard::{Access, GuardDecision, guard};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const WAREHOUSE_MANAGERS_PATH: &str = "/admin/warehousemanagers";
pub const ROOT_PATH: &str = "/";
/// Placeholder path reported for unmatched locations.
pub const NOT_FOUND_PATH: &str = "/404";

/// Where authenticated non-admins land when they hit an admin route.
pub const ADMIN_FALLBACK_PATH: &str = ADMIN_USERS_PATH;

/// Redirect chains longer than this are treated as a table bug.
const MAX_REDIRECTS: usize = 4;

/// Every navigable path the shell knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    Profile,
    Admin,
    AdminUsers,
    WarehouseManagers,
    NotFound,
}

/// View controller a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Login,
    Register,
    Profile,
    AdminUsers,
    WarehouseManagers,
    NotFound,
}

/// What a route does when navigated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render `view` when the guard allows `access`.
    View { access: Access, view: ViewKind },
    /// Unconditional redirect.
    Redirect(&'static str),
}

impl AppRoute {
    /// Known routes, excluding the `NotFound` catch-all.
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Root,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Profile,
        AppRoute::Admin,
        AppRoute::AdminUsers,
        AppRoute::WarehouseManagers,
    ];

    /// Match a location path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { ROOT_PATH } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }

    /// Canonical path. `NotFound` reports a placeholder; the browser stays
    /// on whatever unmatched path it was given.
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => ROOT_PATH,
            Self::NotFound => NOT_FOUND_PATH,
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::Profile => PROFILE_PATH,
            Self::Admin => ADMIN_PATH,
            Self::AdminUsers => ADMIN_USERS_PATH,
            Self::WarehouseManagers => WAREHOUSE_MANAGERS_PATH,
        }
    }

    pub fn target(self) -> RouteTarget {
        match self {
            Self::Root => RouteTarget::Redirect(LOGIN_PATH),
            Self::Login => RouteTarget::View { access: Access::Public, view: ViewKind::Login },
            Self::Register => RouteTarget::View { access: Access::Public, view: ViewKind::Register },
            Self::Profile => RouteTarget::View { access: Access::Authenticated, view: ViewKind::Profile },
            Self::Admin | Self::AdminUsers => RouteTarget::View { access: Access::Admin, view: ViewKind::AdminUsers },
            Self::WarehouseManagers => {
                RouteTarget::View { access: Access::Admin, view: ViewKind::WarehouseManagers }
            }
            Self::NotFound => RouteTarget::View { access: Access::Public, view: ViewKind::NotFound },
        }
    }
}

/// Single-step outcome of arriving at a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(ViewKind),
    Redirect(&'static str),
}

/// Resolve one navigation step.
///
/// A guard redirect that points back at the route being resolved renders
/// the route's view instead; this is how an authenticated non-admin at
/// `/admin/users` ends up on the admin users view.
pub fn resolve(route: AppRoute, session: &Session) -> Resolution {
    match route.target() {
        RouteTarget::Redirect(to) => Resolution::Redirect(to),
        RouteTarget::View { access, view } => match guard(access, session) {
            GuardDecision::Allow => Resolution::Render(view),
            GuardDecision::Redirect(to) if to == route.path() => Resolution::Render(view),
            GuardDecision::Redirect(to) => Resolution::Redirect(to),
        },
    }
}

/// Final outcome of a navigation after following redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Path the browser ends up on.
    pub path: &'static str,
    /// View rendered there.
    pub view: ViewKind,
    /// Intermediate redirect targets, in order.
    pub redirects: Vec<&'static str>,
}

impl Navigation {
    pub fn redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Follow redirects from `route` until a view renders.
pub fn navigate(route: AppRoute, session: &Session) -> Navigation {
    follow(route, |current| resolve(current, session))
}

/// Redirect-following loop over an arbitrary single-step resolver. Chains
/// longer than `MAX_REDIRECTS` end on login.
fn follow(route: AppRoute, mut step: impl FnMut(AppRoute) -> Resolution) -> Navigation {
    let mut current = route;
    let mut redirects = Vec::new();
    loop {
        match step(current) {
            Resolution::Render(view) => {
                return Navigation { path: current.path(), view, redirects };
            }
            Resolution::Redirect(to) => {
                redirects.push(to);
                if redirects.len() > MAX_REDIRECTS {
                    log::error!("redirect loop starting at {}", route.path());
                    return Navigation { path: LOGIN_PATH, view: ViewKind::Login, redirects };
                }
                current = AppRoute::from_path(to);
            }
        }
    }
}

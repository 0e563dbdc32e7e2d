//! Session token and role claim for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard reads the session on every navigation and the API client
//! reads the token on every protected call. Login writes it, logout and
//! rejected requests clear it. Nothing else mutates it.
//!
//! DESIGN
//! ======
//! `SessionStore` is an explicit handle passed to the guard and the API
//! client instead of ambient global storage. It is backed by two string
//! slots (`token`, `role`) in a `SessionStorage` backend, so the pair
//! survives page reloads when the backend is `localStorage`. The store does
//! not cache anything: every `get` reads the slots, so a logout in one view
//! is visible to the very next guard check.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::util::storage::{BrowserStorage, SessionStorage};

/// Storage slot holding the opaque session token.
pub const TOKEN_SLOT: &str = "token";
/// Storage slot holding the role claim asserted at login.
pub const ROLE_SLOT: &str = "role";

/// Coarse role claim asserted by the server at login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// No role claim, or a claim this client does not recognize.
    #[default]
    Guest,
    User,
    Admin,
}

impl Role {
    /// Map a server role claim to a role. Unknown claims never grant access
    /// beyond `Guest`.
    pub fn from_claim(claim: &str) -> Self {
        match claim {
            "admin" => Self::Admin,
            "user" => Self::User,
            "guest" => Self::Guest,
            other => {
                log::warn!("unrecognized role claim {other:?}; treating as guest");
                Self::Guest
            }
        }
    }

    /// Wire/storage spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the stored session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Opaque token; any stored string counts as present.
    pub token: Option<String>,
    /// Role claim; `Guest` when nothing is stored.
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: Some(token.into()), role }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }
}

/// Handle to the durable session slots.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Current token and role. Never fails.
    pub fn get(&self) -> Session {
        Session {
            token: self.storage.read(TOKEN_SLOT),
            role: self
                .storage
                .read(ROLE_SLOT)
                .map_or(Role::Guest, |claim| Role::from_claim(&claim)),
        }
    }

    /// Overwrite both slots.
    pub fn set(&self, token: &str, role: Role) {
        self.storage.write(TOKEN_SLOT, token);
        self.storage.write(ROLE_SLOT, role.as_str());
        log::debug!("session stored (role={role})");
    }

    /// Remove both slots.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_SLOT);
        self.storage.remove(ROLE_SLOT);
        log::debug!("session cleared");
    }

    /// Token for the `Authorization` header, if one is stored.
    pub fn token(&self) -> Option<String> {
        self.storage.read(TOKEN_SLOT)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token.
        let session = self.get();
        f.debug_struct("SessionStore")
            .field("authenticated", &session.is_authenticated())
            .field("role", &session.role)
            .finish()
    }
}

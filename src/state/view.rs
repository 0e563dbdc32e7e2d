//! Fetch-on-mount lifecycle shared by the protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile, admin users, and warehouse managers each issue exactly one API
//! request when mounted and render the result. This module holds the parts
//! of that contract that do not depend on Leptos: the loading/ready/failed
//! state, the mount generation used to drop late responses, and the mapping
//! from an API result to what the view should do next.
//!
//! DESIGN
//! ======
//! A `MountTicket` is taken when the view mounts and invalidated when it
//! unmounts. A response that arrives for a stale ticket is discarded without
//! touching view state or the session.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::FailurePolicy;
use crate::net::api::{ApiError, FailureKind};
use crate::routes::LOGIN_PATH;
use crate::state::session::SessionStore;

/// Render state of a fetch-on-mount view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Mounted, no response yet.
    #[default]
    Loading,
    Ready(T),
    /// Transient failure shown in place. The cause is only logged.
    Failed,
}

/// Generation counter for one view's mounts.
#[derive(Clone, Debug, Default)]
pub struct MountTracker {
    generation: Arc<AtomicU64>,
}

impl MountTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new mount; invalidates tickets from earlier mounts.
    pub fn mount(&self) -> MountTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        MountTicket { generation, current: Arc::clone(&self.generation) }
    }

    /// End the current mount; every outstanding ticket becomes stale.
    pub fn unmount(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Proof that a response belongs to a particular mount.
#[derive(Clone, Debug)]
pub struct MountTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl MountTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// What a view does with a settled fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewOutcome<T> {
    Render(T),
    ShowError,
    Redirect(&'static str),
    /// The view unmounted before the response arrived.
    Discarded,
}

/// Apply the failure policy to a fetch result.
///
/// Authentication failures always redirect to login. The session is cleared
/// first when the policy says so and the token itself was rejected; a `403`
/// keeps it. Transient failures show an error unless the policy collapses
/// them into the login redirect; they never clear the session. Causes are
/// logged and never reach the UI.
pub fn settle<T>(
    view: &str,
    ticket: &MountTicket,
    session: &SessionStore,
    policy: FailurePolicy,
    result: Result<T, ApiError>,
) -> ViewOutcome<T> {
    if !ticket.is_current() {
        log::debug!("{view}: discarding response for unmounted view");
        return ViewOutcome::Discarded;
    }
    match result {
        Ok(payload) => ViewOutcome::Render(payload),
        Err(err) => match err.kind() {
            FailureKind::Auth => {
                log::warn!("{view}: {err}; redirecting to login");
                if policy.clear_session_on_auth_failure && err.revokes_session() {
                    session.clear();
                }
                ViewOutcome::Redirect(LOGIN_PATH)
            }
            FailureKind::Transient if policy.redirect_on_transient_failure => {
                log::warn!("{view}: {err}; redirecting to login");
                ViewOutcome::Redirect(LOGIN_PATH)
            }
            FailureKind::Transient => {
                log::warn!("{view}: {err}");
                ViewOutcome::ShowError
            }
        },
    }
}

/// Fixed notice shown in place of a view whose fetch failed.
pub fn failure_notice(what: &str) -> String {
    format!("Could not load {what}. Please try again later.")
}

/// Await `fetch` and settle it against `ticket`.
pub async fn load<T, F>(
    view: &str,
    ticket: &MountTicket,
    session: &SessionStore,
    policy: FailurePolicy,
    fetch: F,
) -> ViewOutcome<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let result = fetch.await;
    settle(view, ticket, session, policy, result)
}

/// Explicit logout: clear the session and return where to go.
pub fn logout(session: &SessionStore) -> &'static str {
    session.clear();
    log::info!("logged out");
    LOGIN_PATH
}

use futures::executor::block_on;

use super::*;
use crate::routes::{AppRoute, navigate};
use crate::state::session::Role;
use crate::util::storage::MemoryStorage;

fn signed_in() -> SessionStore {
    let session = SessionStore::new(MemoryStorage::new());
    session.set("tokX", Role::User);
    session
}

fn keep_session() -> FailurePolicy {
    FailurePolicy { clear_session_on_auth_failure: false, ..FailurePolicy::default() }
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized { status: 401, message: None }
}

// =============================================================
// MountTracker
// =============================================================

#[test]
fn fresh_ticket_is_current() {
    let tracker = MountTracker::new();
    assert!(tracker.mount().is_current());
}

#[test]
fn unmount_invalidates_ticket() {
    let tracker = MountTracker::new();
    let ticket = tracker.mount();
    tracker.unmount();
    assert!(!ticket.is_current());
}

#[test]
fn remount_invalidates_previous_ticket() {
    let tracker = MountTracker::new();
    let first = tracker.mount();
    let second = tracker.mount();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn view_state_defaults_to_loading() {
    assert_eq!(ViewState::<()>::default(), ViewState::Loading);
}

// =============================================================
// settle
// =============================================================

#[test]
fn success_renders_payload() {
    let ticket = MountTracker::new().mount();
    let outcome = settle("profile", &ticket, &signed_in(), FailurePolicy::default(), Ok(5));
    assert_eq!(outcome, ViewOutcome::Render(5));
}

#[test]
fn auth_failure_redirects_and_clears_by_default() {
    let session = signed_in();
    let ticket = MountTracker::new().mount();
    let outcome: ViewOutcome<()> =
        settle("profile", &ticket, &session, FailurePolicy::default(), Err(unauthorized()));
    assert_eq!(outcome, ViewOutcome::Redirect(LOGIN_PATH));
    assert!(!session.get().is_authenticated());
}

#[test]
fn auth_failure_can_keep_stale_session() {
    let session = signed_in();
    let ticket = MountTracker::new().mount();
    let outcome: ViewOutcome<()> = settle("profile", &ticket, &session, keep_session(), Err(unauthorized()));
    assert_eq!(outcome, ViewOutcome::Redirect(LOGIN_PATH));
    assert_eq!(session.token().as_deref(), Some("tokX"));
}

#[test]
fn missing_token_is_treated_as_auth_failure() {
    let session = SessionStore::new(MemoryStorage::new());
    let ticket = MountTracker::new().mount();
    let outcome: ViewOutcome<()> =
        settle("profile", &ticket, &session, FailurePolicy::default(), Err(ApiError::MissingToken));
    assert_eq!(outcome, ViewOutcome::Redirect(LOGIN_PATH));
}

#[test]
fn transient_failure_shows_error_and_keeps_session() {
    let session = signed_in();
    let ticket = MountTracker::new().mount();
    let outcome: ViewOutcome<()> = settle(
        "users",
        &ticket,
        &session,
        FailurePolicy::default(),
        Err(ApiError::Status { status: 500, message: None }),
    );
    assert_eq!(outcome, ViewOutcome::ShowError);
    assert!(session.get().is_authenticated());
}

#[test]
fn decode_failure_shows_error_without_its_cause() {
    let ticket = MountTracker::new().mount();
    let err = ApiError::Decode("missing field `user` at line 1 column 2".to_owned());
    let outcome: ViewOutcome<()> = settle("profile", &ticket, &signed_in(), FailurePolicy::default(), Err(err));
    assert_eq!(outcome, ViewOutcome::ShowError);

    let notice = failure_notice("profile");
    assert_eq!(notice, "Could not load profile. Please try again later.");
    assert!(!notice.contains("missing field"));
    assert!(!notice.contains("malformed"));
}

#[test]
fn forbidden_redirects_but_keeps_session() {
    let session = signed_in();
    let ticket = MountTracker::new().mount();
    let forbidden = ApiError::Unauthorized { status: 403, message: Some("Admin access required".to_owned()) };
    let outcome: ViewOutcome<()> = settle("users", &ticket, &session, FailurePolicy::default(), Err(forbidden));
    assert_eq!(outcome, ViewOutcome::Redirect(LOGIN_PATH));
    assert_eq!(session.token().as_deref(), Some("tokX"));
}

#[test]
fn collapse_policy_redirects_transient_failures() {
    let session = signed_in();
    let ticket = MountTracker::new().mount();
    let policy = FailurePolicy { redirect_on_transient_failure: true, ..FailurePolicy::default() };
    let outcome: ViewOutcome<()> =
        settle("users", &ticket, &session, policy, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, ViewOutcome::Redirect(LOGIN_PATH));
    assert!(session.get().is_authenticated());
}

#[test]
fn stale_ticket_discards_without_touching_session() {
    let session = signed_in();
    let tracker = MountTracker::new();
    let ticket = tracker.mount();
    tracker.unmount();
    let outcome: ViewOutcome<()> =
        settle("profile", &ticket, &session, FailurePolicy::default(), Err(unauthorized()));
    assert_eq!(outcome, ViewOutcome::Discarded);
    assert!(session.get().is_authenticated());
}

#[test]
fn stale_ticket_discards_success() {
    let tracker = MountTracker::new();
    let ticket = tracker.mount();
    tracker.unmount();
    assert_eq!(
        settle("users", &ticket, &signed_in(), FailurePolicy::default(), Ok(vec![1, 2])),
        ViewOutcome::Discarded
    );
}

#[test]
fn load_awaits_fetch() {
    let ticket = MountTracker::new().mount();
    let outcome = block_on(load("profile", &ticket, &signed_in(), FailurePolicy::default(), async { Ok("hi") }));
    assert_eq!(outcome, ViewOutcome::Render("hi"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_and_returns_login() {
    let session = SessionStore::new(MemoryStorage::new());
    session.set("tok", Role::Admin);
    assert_eq!(logout(&session), LOGIN_PATH);
    assert!(!session.get().is_authenticated());
}

#[test]
fn logout_then_protected_navigation_goes_to_login() {
    let session = SessionStore::new(MemoryStorage::new());
    session.set("tok", Role::Admin);
    logout(&session);
    for route in [AppRoute::Profile, AppRoute::Admin, AppRoute::AdminUsers, AppRoute::WarehouseManagers] {
        assert_eq!(navigate(route, &session.get()).path, LOGIN_PATH, "{route:?}");
    }
}

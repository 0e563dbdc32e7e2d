//! Fetch-on-mount wiring for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies identical mount, fetch, and redirect
//! behavior; this installs it once per page instance.

use std::future::Future;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppApi;
use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::state::view::{MountTracker, ViewState};
#[cfg(feature = "csr")]
use crate::state::view::{ViewOutcome, load};

/// Issue one request for this mount and drive `state` from the result.
///
/// Authentication failures navigate to login. The request is tied to the
/// current mount: if the page unmounts first, the response is dropped.
pub fn install_fetch_on_mount<T, F, Fut>(view: &'static str, state: RwSignal<ViewState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce(AppApi) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = expect_context::<AppApi>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let tracker = MountTracker::new();
    let ticket = tracker.mount();
    on_cleanup(move || tracker.unmount());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let session = api.session().clone();
        match load(view, &ticket, &session, config.failure_policy, fetch(api)).await {
            ViewOutcome::Render(payload) => state.set(ViewState::Ready(payload)),
            ViewOutcome::ShowError => state.set(ViewState::Failed),
            ViewOutcome::Redirect(path) => navigate(path, NavigateOptions::default()),
            ViewOutcome::Discarded => {}
        }
    });

    #[cfg(not(feature = "csr"))]
    {
        let _ = (view, state, fetch, api, config, navigate, ticket);
    }
}

//! Profile page: greets the token holder and offers logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Profile;
use crate::state::session::SessionStore;
use crate::state::view::{ViewState, failure_notice, logout};
use crate::util::fetch::install_fetch_on_mount;

pub(crate) fn welcome_message(profile: &Profile) -> String {
    format!("Welcome, {}!", profile.user)
}

/// Card text once the fetch has settled; `None` while loading. The logout
/// button accompanies every settled card.
pub(crate) fn profile_card_text(state: &ViewState<Profile>) -> Option<String> {
    match state {
        ViewState::Loading => None,
        ViewState::Ready(profile) => Some(welcome_message(profile)),
        ViewState::Failed => Some(failure_notice("profile")),
    }
}

/// Profile page. Fetches `/profile` on mount; logout clears the session and
/// returns to login.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let state = RwSignal::new(ViewState::<Profile>::Loading);

    install_fetch_on_mount("profile", state, |api| async move { api.fetch_profile().await });

    let on_logout = Callback::new(move |()| {
        let to = logout(&session);
        navigate(to, NavigateOptions::default());
    });

    view! {
        <div class="profile-page">
            {move || match profile_card_text(&state.get()) {
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Some(text) => {
                    view! {
                        <div class="card">
                            <h2 class="card-title">"Profile"</h2>
                            <p>{text}</p>
                            <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

//! Login page: username + password exchanged for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::app::AppApi;
#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::net::types::Credentials;
use crate::routes::REGISTER_PATH;
#[cfg(any(test, feature = "csr"))]
use crate::routes::{ADMIN_PATH, PROFILE_PATH};
#[cfg(any(test, feature = "csr"))]
use crate::state::session::Role;

/// Trim the username and require both fields.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Where a fresh session lands.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_PATH,
        Role::User | Role::Guest => PROFILE_PATH,
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn login_failed_message(err: &ApiError) -> String {
    if err.is_auth_failure() {
        err.server_message().unwrap_or("Invalid credentials").to_owned()
    } else {
        "Login failed. Please try again later.".to_owned()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let api = expect_context::<AppApi>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.login(&credentials).await {
                    Ok(role) => navigate(landing_path(role), NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(login_failed_message(&e));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}

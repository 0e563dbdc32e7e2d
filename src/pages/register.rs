//! Registration page. Creating an account does not sign in; success sends
//! the user to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::app::AppApi;
#[cfg(any(test, feature = "csr"))]
use crate::net::api::ApiError;
use crate::pages::login::validate_credentials;
use crate::routes::LOGIN_PATH;

#[cfg(any(test, feature = "csr"))]
pub(crate) fn register_failed_message(err: &ApiError) -> String {
    match err.server_message() {
        Some(message) => format!("Registration failed: {message}"),
        None => "Registration failed. Please try again later.".to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
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
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.register(&credentials).await {
                    Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        info.set(register_failed_message(&e));
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
                <h2>"Register"</h2>
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
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}

//! # gatekeeper
//!
//! Leptos + WASM client shell that gates views on a stored session token and
//! role claim, and fetches role-scoped resources from a remote API.
//!
//! This crate contains the session store, route guard and navigation table,
//! the API client with its failure classification, and the pages that fetch
//! and render protected resources. Browser glue sits behind the `csr`
//! feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ClientConfig;
    use crate::state::session::SessionStore;

    console_error_panic_hook::set_once();
    let config = ClientConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("gatekeeper starting (api={})", config.api_base_url);

    let session = SessionStore::browser();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() session=session.clone()/> });
}

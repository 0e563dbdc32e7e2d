//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::gate::Gate;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;

/// API client type provided through context.
pub type AppApi = ApiClient<BrowserTransport>;

/// Root application component.
///
/// Provides the session store, API client, and config as contexts and
/// declares the navigation table. Every route, including the catch-all,
/// goes through `Gate`.
#[component]
pub fn App(config: ClientConfig, session: SessionStore) -> impl IntoView {
    provide_meta_context();

    let api = AppApi::new(config.api_base_url.clone(), session.clone(), BrowserTransport);
    provide_context(session);
    provide_context(api);
    provide_context(config);

    view! {
        <Title text="Gatekeeper"/>

        <Router>
            <Routes fallback=|| view! { <Gate route=AppRoute::NotFound/> }>
                <Route path=StaticSegment("") view=|| view! { <Gate route=AppRoute::Root/> }/>
                <Route path=StaticSegment("login") view=|| view! { <Gate route=AppRoute::Login/> }/>
                <Route path=StaticSegment("register") view=|| view! { <Gate route=AppRoute::Register/> }/>
                <Route path=StaticSegment("profile") view=|| view! { <Gate route=AppRoute::Profile/> }/>
                <Route path=StaticSegment("admin") view=|| view! { <Gate route=AppRoute::Admin/> }/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| view! { <Gate route=AppRoute::AdminUsers/> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("warehousemanagers"))
                    view=|| view! { <Gate route=AppRoute::WarehouseManagers/> }
                />
            </Routes>
        </Router>
    }
}

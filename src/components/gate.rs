//! Route guard wrapper mounted for every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router mounts a fresh `Gate` on every navigation, so the session is
//! re-read each time. A logout or cleared token takes effect on the next
//! navigation, never mid-render.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::pages::{
    admin_users::AdminUsersPage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage, warehouse_managers::WarehouseManagersPage,
};
use crate::routes::{AppRoute, ViewKind, navigate};
use crate::state::session::SessionStore;

/// Render `route`'s view if the guard allows it, otherwise redirect to
/// wherever the navigation settles.
#[component]
pub fn Gate(route: AppRoute) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let nav = navigate(route, &session.get());

    if nav.redirected() {
        log::debug!("{} redirected to {}", route.path(), nav.path);
        view! { <Redirect path=nav.path/> }.into_any()
    } else {
        render_view(nav.view)
    }
}

fn render_view(kind: ViewKind) -> AnyView {
    match kind {
        ViewKind::Login => view! { <LoginPage/> }.into_any(),
        ViewKind::Register => view! { <RegisterPage/> }.into_any(),
        ViewKind::Profile => view! { <ProfilePage/> }.into_any(),
        ViewKind::AdminUsers => view! { <AdminUsersPage/> }.into_any(),
        ViewKind::WarehouseManagers => view! { <WarehouseManagersPage/> }.into_any(),
        ViewKind::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}

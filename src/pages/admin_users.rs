//! Admin users page, mounted for both `/admin` and `/admin/users`.

use leptos::prelude::*;

use crate::components::record_list::{RecordList, record_lines};
use crate::net::types::UserRecord;
use crate::state::view::{ViewState, failure_notice};
use crate::util::fetch::install_fetch_on_mount;

/// Lists every account as "username - role".
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::<Vec<UserRecord>>::Loading);

    install_fetch_on_mount("admin users", state, |api| async move { api.fetch_users().await });

    view! {
        <div class="admin-page">
            <h2>"Admin Dashboard"</h2>
            {move || match state.get() {
                ViewState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                ViewState::Failed => view! { <p class="view-error">{failure_notice("users")}</p> }.into_any(),
                ViewState::Ready(users) => view! { <RecordList lines=record_lines(&users)/> }.into_any(),
            }}
        </div>
    }
}

//! Warehouse managers page.

use leptos::prelude::*;

use crate::components::record_list::{RecordList, record_lines};
use crate::net::types::WarehouseManager;
use crate::state::view::{ViewState, failure_notice};
use crate::util::fetch::install_fetch_on_mount;

/// Lists warehouse managers as "name - contact".
#[component]
pub fn WarehouseManagersPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::<Vec<WarehouseManager>>::Loading);

    install_fetch_on_mount("warehouse managers", state, |api| async move {
        api.fetch_warehouse_managers().await
    });

    view! {
        <div class="admin-page">
            <h2>"Warehouse Managers Dashboard"</h2>
            {move || match state.get() {
                ViewState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                ViewState::Failed => {
                    view! { <p class="view-error">{failure_notice("warehouse managers")}</p> }.into_any()
                }
                ViewState::Ready(managers) => view! { <RecordList lines=record_lines(&managers)/> }.into_any(),
            }}
        </div>
    }
}

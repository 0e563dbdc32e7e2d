//! Keyed list of "primary - secondary" lines for admin list pages.

#[cfg(test)]
#[path = "record_list_test.rs"]
mod record_list_test;

use leptos::prelude::*;

use crate::net::types::RecordLine;

/// Key and rendered text for each record, in payload order.
pub fn record_lines<R: RecordLine>(records: &[R]) -> Vec<(u64, String)> {
    records.iter().map(|r| (r.key(), r.line())).collect()
}

/// Unordered list with one `<li>` per record, keyed by record id.
#[component]
pub fn RecordList(lines: Vec<(u64, String)>) -> impl IntoView {
    let empty = lines.is_empty();

    view! {
        <ul class="record-list">
            <For
                each=move || lines.clone()
                key=|(id, _)| *id
                children=|(_, line)| view! { <li class="record-list__item">{line}</li> }
            />
        </ul>
        <Show when=move || empty>
            <p class="record-list__empty">"Nothing to show."</p>
        </Show>
    }
}

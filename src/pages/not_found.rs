//! Catch-all page for paths outside the navigation table.

use leptos::prelude::*;

use crate::routes::LOGIN_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2>"Page not found."</h2>
            <a href=LOGIN_PATH>"Go to login"</a>
        </div>
    }
}

//! Placeholder for navigation destinations that have no screen yet.

use leptos::prelude::*;

#[component]
pub fn ComingSoonPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <h1>{title}</h1>
                <p class="page__subtitle">"This section is not available yet."</p>
            </header>
        </div>
    }
}

//! Guarded layout for every authenticated route.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::{install_route_guard, requested_destination};

/// Sidebar plus routed content. Nothing protected renders until the session
/// check resolves to a signed-in user; anonymous visitors are sent to login.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let (pathname, search, hash) = (location.pathname, location.search, location.hash);
    let requested = Memo::new(move |_| requested_destination(&pathname.get(), &search.get(), &hash.get()));

    install_route_guard(session, ui, requested, use_navigate());

    view! {
        <Show
            when=move || session.with(SessionState::is_authenticated)
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{app_shell::AppShell, toast_stack::ToastStack};
use crate::net::api::DemoAuthenticator;
use crate::pages::{
    coming_soon::ComingSoonPage, dashboard::DashboardPage, login::LoginPage, students::StudentsPage,
};
use crate::state::session::{SessionState, SessionStore};
use crate::state::ui::UiState;
use crate::util::auth::DEFAULT_LANDING;
use crate::util::storage::BrowserStorage;

/// Session store wired to browser storage and the demo authenticator.
pub type AppSessionStore = SessionStore<BrowserStorage, DemoAuthenticator>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store for the lifetime of the app, provides it and the
/// shared state signals as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppSessionStore::new(BrowserStorage, DemoAuthenticator::new());

    // Server and client both start in Loading so hydration agrees; only the
    // browser ever finishes the check.
    let mut initial = SessionState::default();
    store.begin_initialize(&mut initial);
    let session = RwSignal::new(initial);
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(store.clone());

    Effect::new(move || {
        session.update(|s| store.finish_initialize(s));
    });
    on_cleanup(|| log::debug!("session store released"));

    view! {
        <Stylesheet id="leptos" href="/pkg/edumanage.css"/>
        <Title text="EduManage"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AppShell>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_LANDING/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("attendance") view=|| view! { <ComingSoonPage title="Attendance"/> }/>
                    <Route path=StaticSegment("fees") view=|| view! { <ComingSoonPage title="Fees"/> }/>
                    <Route path=StaticSegment("timetable") view=|| view! { <ComingSoonPage title="Timetable"/> }/>
                    <Route path=StaticSegment("results") view=|| view! { <ComingSoonPage title="Results"/> }/>
                </ParentRoute>
            </Routes>
            <ToastStack/>
        </Router>
    }
}

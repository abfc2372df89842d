//! Persistent side navigation with school branding, user card, and logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::AppSessionStore;
use crate::state::session::SessionState;

/// One entry in the side navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Dashboard", href: "/dashboard" },
    NavItem { label: "Students", href: "/students" },
    NavItem { label: "Attendance", href: "/attendance" },
    NavItem { label: "Fees", href: "/fees" },
    NavItem { label: "Timetable", href: "/timetable" },
    NavItem { label: "Results", href: "/results" },
];

/// Whether `href` is the current location. A trailing slash is ignored.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == href
}

/// Uppercased first letter of each word; empty for a blank name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<AppSessionStore>();
    let pathname = use_location().pathname;

    let school_name = move || session.with(|s| s.user().map(|u| u.school_name.clone()).unwrap_or_default());
    let user_name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());
    let user_initials = move || session.with(|s| s.user().map(|u| initials(&u.name)).unwrap_or_default());
    let role = move || session.with(|s| s.user().map(|u| u.role.label().to_owned()).unwrap_or_default());

    let on_logout = move |_| session.update(|s| store.logout(s));

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <div class="sidebar__logo">"E"</div>
                <div>
                    <h1 class="sidebar__title">"EduManage"</h1>
                    <p class="sidebar__school">{school_name}</p>
                </div>
            </div>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let href = item.href;
                        view! {
                            <a
                                href=href
                                class="sidebar__link"
                                class:sidebar__link--active=move || is_active(&pathname.get(), href)
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <div class="sidebar__user">
                    <div class="sidebar__avatar">{user_initials}</div>
                    <div class="sidebar__user-text">
                        <p class="sidebar__user-name">{user_name}</p>
                        <p class="sidebar__user-role">{role}</p>
                    </div>
                </div>
                <button class="sidebar__action" type="button">
                    "Settings"
                </button>
                <button class="sidebar__action sidebar__action--logout" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

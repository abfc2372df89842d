//! Route guard and post-login redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated shell applies one guard to every protected route: wait
//! while the stored session is being checked, let authenticated users through,
//! and bounce everyone else to `/login` remembering where they were headed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionPhase, SessionState};
use crate::state::ui::UiState;

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Where a fresh sign-in lands when no destination was recorded.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// Outcome of guarding one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Stored session not checked yet; render nothing protected.
    Pending,
    Allow,
    RedirectToLogin { return_to: String },
}

/// Decide whether `requested` may render for `state`.
pub fn evaluate(state: &SessionState, requested: &str) -> GuardDecision {
    match state.phase() {
        SessionPhase::Uninitialized | SessionPhase::Loading => GuardDecision::Pending,
        SessionPhase::Authenticated => GuardDecision::Allow,
        SessionPhase::Anonymous => GuardDecision::RedirectToLogin { return_to: requested.to_owned() },
    }
}

/// Where to go after signing in. Only local absolute paths outside the login
/// page are honoured.
pub fn post_login_target(return_to: Option<&str>) -> String {
    match return_to {
        Some(path) if is_local_path(path) && !is_login_path(path) => path.to_owned(),
        _ => DEFAULT_LANDING.to_owned(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

fn is_login_path(path: &str) -> bool {
    path.strip_prefix(LOGIN_PATH)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?', '#']))
}

/// Rebuild the requested destination from router location parts. The query
/// and fragment are accepted with or without their leading `?` / `#`.
pub fn requested_destination(pathname: &str, search: &str, hash: &str) -> String {
    let mut destination = pathname.to_owned();
    let query = search.trim_start_matches('?');
    if !query.is_empty() {
        destination.push('?');
        destination.push_str(query);
    }
    let fragment = hash.trim_start_matches('#');
    if !fragment.is_empty() {
        destination.push('#');
        destination.push_str(fragment);
    }
    destination
}

/// Redirect to `/login` whenever the guard rejects `requested`, recording it
/// in [`UiState::return_to`]. `requested` should carry the query and fragment
/// (see [`requested_destination`]).
pub fn install_route_guard<F>(session: RwSignal<SessionState>, ui: RwSignal<UiState>, requested: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        let path = requested.get();
        if let GuardDecision::RedirectToLogin { return_to } = evaluate(&state, &path) {
            log::debug!("guard redirecting {return_to} to login");
            ui.update(|u| u.return_to = Some(return_to));
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

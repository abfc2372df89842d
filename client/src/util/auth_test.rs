use futures::executor::block_on;

use super::*;
use crate::net::api::DemoAuthenticator;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

fn store() -> SessionStore<MemoryStorage, DemoAuthenticator> {
    SessionStore::new(MemoryStorage::new(), DemoAuthenticator::with_clock(|| 7))
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    store().initialize(&mut state);
    state
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn guard_waits_before_initialize() {
    assert_eq!(evaluate(&SessionState::default(), "/students"), GuardDecision::Pending);
}

#[test]
fn guard_waits_while_loading() {
    let mut state = SessionState::default();
    store().begin_initialize(&mut state);
    assert_eq!(evaluate(&state, "/students"), GuardDecision::Pending);
}

#[test]
fn guard_redirects_anonymous_and_records_destination() {
    assert_eq!(
        evaluate(&anonymous(), "/students"),
        GuardDecision::RedirectToLogin { return_to: "/students".to_owned() }
    );
}

#[test]
fn guard_allows_authenticated() {
    let store = store();
    let mut state = SessionState::default();
    store.initialize(&mut state);
    block_on(store.login(&mut state, "admin@school.edu", "pw")).unwrap();
    assert_eq!(evaluate(&state, "/dashboard"), GuardDecision::Allow);
}

// =============================================================
// requested_destination
// =============================================================

#[test]
fn requested_destination_keeps_query_and_fragment() {
    assert_eq!(requested_destination("/fees", "?term=1", "#due"), "/fees?term=1#due");
    assert_eq!(requested_destination("/fees", "term=1", "due"), "/fees?term=1#due");
}

#[test]
fn requested_destination_is_bare_path_without_extras() {
    assert_eq!(requested_destination("/students", "", ""), "/students");
    assert_eq!(requested_destination("/students", "?", "#"), "/students");
}

#[test]
fn recorded_query_survives_post_login_redirect() {
    let requested = requested_destination("/fees", "term=1", "");
    let GuardDecision::RedirectToLogin { return_to } = evaluate(&anonymous(), &requested) else {
        panic!("anonymous visitor should be redirected");
    };
    assert_eq!(post_login_target(Some(&return_to)), "/fees?term=1");
}

// =============================================================
// post_login_target
// =============================================================

#[test]
fn post_login_target_defaults_to_dashboard() {
    assert_eq!(post_login_target(None), "/dashboard");
}

#[test]
fn post_login_target_honours_recorded_path() {
    assert_eq!(post_login_target(Some("/students")), "/students");
    assert_eq!(post_login_target(Some("/fees?term=1")), "/fees?term=1");
}

#[test]
fn post_login_target_rejects_foreign_or_login_paths() {
    assert_eq!(post_login_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("//evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("/\\evil.example")), "/dashboard");
    assert_eq!(post_login_target(Some("/login")), "/dashboard");
    assert_eq!(post_login_target(Some("/login?x=1")), "/dashboard");
}

#[test]
fn post_login_target_keeps_paths_that_merely_start_with_login() {
    assert_eq!(post_login_target(Some("/logins")), "/logins");
}

use futures::executor::block_on;

use super::*;

// =============================================================
// DemoAuthenticator
// =============================================================

#[test]
fn demo_authenticator_issues_admin_session_for_any_credentials() {
    let auth = DemoAuthenticator::with_clock(|| 1_700_000_000_000);
    let session = block_on(auth.authenticate("principal@school.edu", "whatever")).unwrap();
    assert_eq!(session.user.email, "principal@school.edu");
    assert_eq!(session.user.role, Role::Admin);
    assert_eq!(session.user.school_name, "Springfield High School");
    assert_eq!(session.token, "mock-jwt-token-1700000000000");
}

#[test]
fn demo_authenticator_accepts_empty_secret() {
    let auth = DemoAuthenticator::with_clock(|| 5);
    assert!(block_on(auth.authenticate("", "")).is_ok());
}

#[test]
fn demo_authenticator_token_tracks_clock() {
    let auth = DemoAuthenticator::new();
    let session = block_on(auth.authenticate("a@b.c", "x")).unwrap();
    let millis: u64 = session.token.trim_start_matches(DEMO_TOKEN_PREFIX).parse().unwrap();
    assert!(millis > 0);
}

// =============================================================
// AuthError messages
// =============================================================

#[test]
fn auth_error_messages_are_distinct_per_cause() {
    let errors = [
        AuthError::InvalidCredentials,
        AuthError::Network("offline".to_owned()),
        AuthError::Timeout,
        AuthError::Server { status: 503, message: "down".to_owned() },
        AuthError::AlreadySignedIn,
        AuthError::NotReady,
        AuthError::Unexpected("boom".to_owned()),
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.user_message(), b.user_message(), "{a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn auth_error_display_includes_detail() {
    let err = AuthError::Server { status: 502, message: "bad gateway".to_owned() };
    assert_eq!(err.to_string(), "server error 502: bad gateway");
}

// =============================================================
// DemoStudentDirectory
// =============================================================

#[test]
fn demo_roster_matches_fixture_records() {
    let students = DemoStudentDirectory.list();
    let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alice Johnson", "Bob Smith", "Charlie Brown", "Diana Wilson"]);

    let charlie = &students[2];
    assert_eq!(charlie.student_id, "STU003");
    assert_eq!(charlie.class, "9");
    assert_eq!(charlie.section, "B");
    assert_eq!(charlie.roll_number, "003");
    assert_eq!(charlie.fee_status, FeeStatus::Overdue);
    assert_eq!(charlie.contact_number, "+1 234 567 8903");
    assert_eq!(charlie.email, "charlie.brown@email.com");
}

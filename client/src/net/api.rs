//! Backend collaborator seams and the demo implementations shipped today.
//!
//! There is no backend yet. `DemoAuthenticator` accepts any credentials and
//! fabricates a session; `DemoStudentDirectory` serves a fixed roster. Real
//! services replace them by implementing the same traits.
//!
//! ERROR HANDLING
//! ==============
//! Authentication failures are typed so the login view can show a distinct
//! message per cause instead of a single "login failed".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{FeeStatus, Role, Session, Student, StudentStatus, User};
use crate::util::clock::now_millis;

/// Why a sign-in attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("network error: {0}")]
    Network(String),
    #[error("authentication request timed out")]
    Timeout,
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("a user is already signed in")]
    AlreadySignedIn,
    #[error("stored session has not been checked yet")]
    NotReady,
    #[error("unexpected login failure: {0}")]
    Unexpected(String),
}

impl AuthError {
    /// Message shown to the user in the failure notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Please check your credentials and try again.",
            Self::Network(_) => "Unable to reach the server. Check your connection and try again.",
            Self::Timeout => "The server took too long to respond. Please try again.",
            Self::Server { .. } => "The server could not complete sign-in. Please try again later.",
            Self::AlreadySignedIn => "You are already signed in. Sign out before switching accounts.",
            Self::NotReady => "Still checking for a saved session. Please try again in a moment.",
            Self::Unexpected(_) => "An error occurred during login. Please try again.",
        }
    }
}

/// Exchanges credentials for a session.
pub trait Authenticator {
    /// # Errors
    ///
    /// Returns an [`AuthError`] describing why no session was issued.
    fn authenticate(&self, identifier: &str, secret: &str) -> impl Future<Output = Result<Session, AuthError>>;
}

const DEMO_TOKEN_PREFIX: &str = "mock-jwt-token-";

/// Accepts any credentials and issues a fixed administrator session whose
/// token embeds the current time.
#[derive(Clone, Copy, Debug)]
pub struct DemoAuthenticator {
    clock: fn() -> u64,
}

impl DemoAuthenticator {
    #[must_use]
    pub fn new() -> Self {
        Self { clock: now_millis }
    }

    /// Use `clock` instead of the wall clock for token generation.
    #[must_use]
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self { clock }
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, identifier: &str, _secret: &str) -> Result<Session, AuthError> {
        log::debug!("demo authenticator accepting {identifier}");
        let user = User {
            id: "1".to_owned(),
            name: "John Anderson".to_owned(),
            email: identifier.to_owned(),
            role: Role::Admin,
            school_name: "Springfield High School".to_owned(),
        };
        let token = format!("{DEMO_TOKEN_PREFIX}{}", (self.clock)());
        Ok(Session { user, token })
    }
}

/// Supplies the student roster.
pub trait StudentDirectory {
    fn list(&self) -> Vec<Student>;
}

/// Fixed four-student roster.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoStudentDirectory;

impl StudentDirectory for DemoStudentDirectory {
    fn list(&self) -> Vec<Student> {
        vec![
            demo_student("1", "Alice Johnson", "10", "A", StudentStatus::Active, FeeStatus::Paid),
            demo_student("2", "Bob Smith", "10", "A", StudentStatus::Active, FeeStatus::Pending),
            demo_student("3", "Charlie Brown", "9", "B", StudentStatus::Active, FeeStatus::Overdue),
            demo_student("4", "Diana Wilson", "11", "A", StudentStatus::Active, FeeStatus::Paid),
        ]
    }
}

fn demo_student(
    id: &str,
    name: &str,
    class: &str,
    section: &str,
    status: StudentStatus,
    fee_status: FeeStatus,
) -> Student {
    let email_local = name.to_ascii_lowercase().replace(' ', ".");
    Student {
        id: id.to_owned(),
        name: name.to_owned(),
        student_id: format!("STU{id:0>3}"),
        class: class.to_owned(),
        section: section.to_owned(),
        roll_number: format!("{id:0>3}"),
        status,
        fee_status,
        contact_number: format!("+1 234 567 890{id}"),
        email: format!("{email_local}@email.com"),
    }
}

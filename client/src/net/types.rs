//! Records exchanged with browser storage and backend services.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the persisted `userData` entry keeps
//! the same JSON layout the web client has always written.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Signed-in user as returned by the authenticator and persisted in storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Older records may carry a numeric id; it is read back as text.
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub school_name: String,
}

impl User {
    /// First word of the display name, if there is one.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

/// Staff role attached to a user account.
///
/// Roles this client does not know yet are kept verbatim in `Other` so a
/// stored record still restores and writes back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Teacher,
    Other(String),
}

impl Role {
    /// Capitalized label for display; unknown roles show as stored.
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "admin" => Self::Admin,
            "teacher" => Self::Teacher,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "admin".to_owned(),
            Role::Teacher => "teacher".to_owned(),
            Role::Other(raw) => raw,
        }
    }
}

/// Authenticated session payload: the user plus their bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// A student roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub student_id: String,
    pub class: String,
    pub section: String,
    pub roll_number: String,
    pub status: StudentStatus,
    pub fee_status: FeeStatus,
    pub contact_number: String,
    pub email: String,
}

/// Enrollment status of a student.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl StudentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Badge modifier class for the status pill.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--green",
            Self::Inactive => "badge badge--gray",
        }
    }
}

/// Fee payment standing of a student.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
}

impl FeeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }

    /// Badge modifier class for the fee pill.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Paid => "badge badge--green",
            Self::Pending => "badge badge--yellow",
            Self::Overdue => "badge badge--red",
        }
    }
}

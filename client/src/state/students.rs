//! Roster filtering and summary counts for the students page.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use crate::net::types::{FeeStatus, Student, StudentStatus};

/// Select value meaning "every class".
pub const ALL_CLASSES: &str = "all";

/// Classes offered in the class filter, in display order.
pub const CLASS_OPTIONS: [&str; 4] = ["9", "10", "11", "12"];

/// Class restriction applied by the class select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassFilter {
    #[default]
    All,
    Class(String),
}

impl ClassFilter {
    /// Parse a select value; `"all"` is the wildcard.
    pub fn from_select(value: &str) -> Self {
        if value == ALL_CLASSES {
            Self::All
        } else {
            Self::Class(value.to_owned())
        }
    }

    fn admits(&self, class: &str) -> bool {
        match self {
            Self::All => true,
            Self::Class(wanted) => wanted == class,
        }
    }
}

/// Search text plus class restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentFilter {
    search: String,
    class: ClassFilter,
}

impl StudentFilter {
    pub fn new(search: &str, class: ClassFilter) -> Self {
        Self { search: search.to_lowercase(), class }
    }

    /// Name or student id contains the search text (case-insensitive) and the
    /// class filter admits the record's class.
    pub fn matches(&self, student: &Student) -> bool {
        let text_hit = student.name.to_lowercase().contains(&self.search)
            || student.student_id.to_lowercase().contains(&self.search);
        text_hit && self.class.admits(&student.class)
    }
}

/// Records admitted by `filter`, in source order.
pub fn filter_students(students: &[Student], filter: &StudentFilter) -> Vec<Student> {
    students.iter().filter(|s| filter.matches(s)).cloned().collect()
}

/// Headline counts over the full roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StudentSummary {
    pub total: usize,
    pub active: usize,
    pub fee_pending: usize,
    pub fee_overdue: usize,
}

impl StudentSummary {
    pub fn from_roster(students: &[Student]) -> Self {
        students.iter().fold(Self::default(), |mut acc, s| {
            acc.total += 1;
            if s.status == StudentStatus::Active {
                acc.active += 1;
            }
            match s.fee_status {
                FeeStatus::Pending => acc.fee_pending += 1,
                FeeStatus::Overdue => acc.fee_overdue += 1,
                FeeStatus::Paid => {}
            }
            acc
        })
    }
}

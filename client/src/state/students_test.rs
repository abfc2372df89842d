use super::*;
use crate::net::api::{DemoStudentDirectory, StudentDirectory};

fn roster() -> Vec<Student> {
    DemoStudentDirectory.list()
}

fn names(students: &[Student]) -> Vec<&str> {
    students.iter().map(|s| s.name.as_str()).collect()
}

// =============================================================
// ClassFilter
// =============================================================

#[test]
fn class_filter_parses_wildcard() {
    assert_eq!(ClassFilter::from_select("all"), ClassFilter::All);
    assert_eq!(ClassFilter::from_select("10"), ClassFilter::Class("10".to_owned()));
}

#[test]
fn class_filter_default_is_all() {
    assert_eq!(StudentFilter::default(), StudentFilter::new("", ClassFilter::All));
}

// =============================================================
// filter_students
// =============================================================

#[test]
fn search_by_name_is_case_insensitive() {
    let filter = StudentFilter::new("bob", ClassFilter::All);
    assert_eq!(names(&filter_students(&roster(), &filter)), ["Bob Smith"]);

    let filter = StudentFilter::new("BOB", ClassFilter::All);
    assert_eq!(names(&filter_students(&roster(), &filter)), ["Bob Smith"]);
}

#[test]
fn empty_search_with_class_nine_yields_charlie() {
    let filter = StudentFilter::new("", ClassFilter::from_select("9"));
    assert_eq!(names(&filter_students(&roster(), &filter)), ["Charlie Brown"]);
}

#[test]
fn search_matches_student_id() {
    let filter = StudentFilter::new("stu004", ClassFilter::All);
    assert_eq!(names(&filter_students(&roster(), &filter)), ["Diana Wilson"]);
}

#[test]
fn shared_id_prefix_keeps_source_order() {
    let filter = StudentFilter::new("STU", ClassFilter::All);
    assert_eq!(
        names(&filter_students(&roster(), &filter)),
        ["Alice Johnson", "Bob Smith", "Charlie Brown", "Diana Wilson"]
    );
}

#[test]
fn search_and_class_must_both_match() {
    let filter = StudentFilter::new("alice", ClassFilter::from_select("11"));
    assert!(filter_students(&roster(), &filter).is_empty());

    let filter = StudentFilter::new("a", ClassFilter::from_select("10"));
    assert_eq!(names(&filter_students(&roster(), &filter)), ["Alice Johnson"]);
}

#[test]
fn class_without_students_yields_nothing() {
    let filter = StudentFilter::new("", ClassFilter::from_select("12"));
    assert!(filter_students(&roster(), &filter).is_empty());
}

#[test]
fn filter_agrees_with_definition_for_sample_inputs() {
    let students = roster();
    let searches = ["", "a", "SMITH", "stu00", "003", "o", "zzz", " "];
    let classes = ["all", "9", "10", "11", "12"];
    for search in searches {
        for class in classes {
            let got = filter_students(&students, &StudentFilter::new(search, ClassFilter::from_select(class)));
            let needle = search.to_lowercase();
            let expected: Vec<Student> = students
                .iter()
                .filter(|s| {
                    (s.name.to_lowercase().contains(&needle) || s.student_id.to_lowercase().contains(&needle))
                        && (class == "all" || s.class == class)
                })
                .cloned()
                .collect();
            assert_eq!(got, expected, "search={search:?} class={class:?}");
        }
    }
}

// =============================================================
// StudentSummary
// =============================================================

#[test]
fn summary_counts_full_roster() {
    let summary = StudentSummary::from_roster(&roster());
    assert_eq!(summary, StudentSummary { total: 4, active: 4, fee_pending: 1, fee_overdue: 1 });
}

#[test]
fn summary_of_empty_roster_is_zero() {
    assert_eq!(StudentSummary::from_roster(&[]), StudentSummary::default());
}

#[test]
fn summary_skips_inactive_students() {
    let mut students = roster();
    students[0].status = StudentStatus::Inactive;
    assert_eq!(StudentSummary::from_roster(&students).active, 3);
}

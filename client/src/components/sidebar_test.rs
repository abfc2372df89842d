use super::*;

// =============================================================
// is_active
// =============================================================

#[test]
fn is_active_matches_exact_path() {
    assert!(is_active("/students", "/students"));
    assert!(!is_active("/students", "/dashboard"));
}

#[test]
fn is_active_ignores_trailing_slash() {
    assert!(is_active("/fees/", "/fees"));
}

#[test]
fn is_active_does_not_match_prefixes() {
    assert!(!is_active("/students/3", "/students"));
    assert!(!is_active("/", "/dashboard"));
}

#[test]
fn exactly_one_nav_item_is_active_per_destination() {
    for item in NAV_ITEMS {
        let active = NAV_ITEMS.iter().filter(|other| is_active(item.href, other.href)).count();
        assert_eq!(active, 1, "{}", item.href);
    }
}

// =============================================================
// initials
// =============================================================

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(initials("John Anderson"), "JA");
    assert_eq!(initials("mary jane watson"), "MJW");
}

#[test]
fn initials_of_blank_name_are_empty() {
    assert_eq!(initials(""), "");
    assert_eq!(initials("   "), "");
}

#[test]
fn initials_collapse_repeated_whitespace() {
    assert_eq!(initials("  Ada   Lovelace "), "AL");
}

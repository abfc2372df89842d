use super::*;
use crate::net::types::Role;
use crate::components::sidebar::NAV_ITEMS;

fn user(name: &str) -> User {
    User {
        id: "1".to_owned(),
        name: name.to_owned(),
        email: "admin@school.edu".to_owned(),
        role: Role::Admin,
        school_name: "Springfield High School".to_owned(),
    }
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(
        greeting(Some(&user("John Anderson"))),
        "Welcome back, John! Here's what's happening at your school today."
    );
}

#[test]
fn greeting_without_user_or_name_is_generic() {
    let generic = "Welcome back! Here's what's happening at your school today.";
    assert_eq!(greeting(None), generic);
    assert_eq!(greeting(Some(&user(""))), generic);
}

#[test]
fn trend_direction_matches_change_sign() {
    for stat in STATS {
        let expected = if stat.change.starts_with('-') { Trend::Down } else { Trend::Up };
        assert_eq!(stat.trend, expected, "{}", stat.title);
    }
}

#[test]
fn trend_classes_differ() {
    assert_ne!(Trend::Up.class(), Trend::Down.class());
}

#[test]
fn quick_actions_point_at_navigation_destinations() {
    for action in QUICK_ACTIONS {
        assert!(NAV_ITEMS.iter().any(|item| item.href == action.href), "{}", action.href);
    }
}

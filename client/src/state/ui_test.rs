use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_empty() {
    let state = UiState::default();
    assert!(state.return_to.is_none());
    assert!(state.toasts.is_empty());
}

#[test]
fn toast_variant_default_is_default() {
    assert_eq!(ToastVariant::default(), ToastVariant::Default);
}

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.push_toast("Login successful", "Welcome", ToastVariant::Default);
    let b = state.push_toast("Login failed", "Nope", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_toast_removes_only_matching_id() {
    let mut state = UiState::default();
    let a = state.push_toast("a", "", ToastVariant::Default);
    let b = state.push_toast("b", "", ToastVariant::Default);
    state.dismiss_toast(a);
    assert_eq!(state.toasts.iter().map(|t| t.id).collect::<Vec<_>>(), [b]);
}

#[test]
fn dismiss_unknown_toast_is_noop() {
    let mut state = UiState::default();
    state.push_toast("a", "", ToastVariant::Default);
    state.dismiss_toast(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = UiState::default();
    let a = state.push_toast("a", "", ToastVariant::Default);
    state.dismiss_toast(a);
    let b = state.push_toast("b", "", ToastVariant::Default);
    assert_ne!(a, b);
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated shell and shared widgets while
//! reading/writing shared state from Leptos context providers.

pub mod app_shell;
pub mod sidebar;
pub mod stat_card;
pub mod student_card;
pub mod toast_stack;

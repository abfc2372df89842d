//! Local UI chrome state (notifications, pending post-login destination).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session so the guard and
//! login page can hand off the requested destination without touching auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 5_000;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Destination the guard bounced to login; consumed after sign-in.
    pub return_to: Option<String>,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, title: title.to_owned(), description: description.to_owned(), variant });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

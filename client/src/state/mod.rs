//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `students`, `ui`) so individual
//! components can depend on small focused models.

pub mod session;
pub mod students;
pub mod ui;

//! Data types and backend collaborator seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the records shared with browser storage and the eventual
//! backend, and `api` defines the authenticator and student-directory traits
//! together with the demo implementations the UI ships with.

pub mod api;
pub mod types;

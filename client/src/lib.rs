//! # client
//!
//! Leptos + WASM frontend for EduManage, a school administration console.
//!
//! This crate contains the session store, route guard, pages, and shell
//! components. Browser-only paths sit behind the `hydrate` feature; the `ssr`
//! feature lets the `server` crate render the same components.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM front end for The Club newspaper. Owns the browser side of
//! the session: one `SessionStore` per page load, backed by `localStorage`,
//! with every protected page guarded against the current session.

pub mod app;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point; runs when the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::mount_to_body(app::App);
}

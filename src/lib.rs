//! # fastcode-web
//!
//! Leptos + WASM front end for the FastCode proxy landing page.
//!
//! The page has three independent pieces: a persisted light/dark theme
//! toggle, a form that opens a same-directory URL in a new tab, and the
//! bootstrap for the hosted Waline comment widget. Browser access is gated
//! behind the `csr` feature so the pure logic builds and tests natively.

pub mod app;
pub mod comments;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod util;

/// WASM entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}

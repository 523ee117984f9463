//! # client
//!
//! Leptos + WASM front end for Content Guardian.
//!
//! The auth state machine lives in the `guardian` crate. This crate plugs the
//! browser into its seams (Web Storage, `Date.now()`, `gloo` timers and HTTP,
//! `storage` events, router navigation) and renders the guarded routes,
//! pages, header navigation, and notices on top of the published
//! `AuthState`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;

#[cfg(feature = "csr")]
pub mod platform;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

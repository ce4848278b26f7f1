//! # client
//!
//! Leptos + WASM front end for Terrea: an email/password login screen, a
//! minimal authenticated landing page, and a dark/light theme switch.
//!
//! The login endpoint is an external service; this crate only calls it.
//! Session state lives in memory for the life of the page.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated JS after the WASM loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! # client
//!
//! Leptos + WASM front-end for the PulseSpend marketing site: a landing page
//! plus registration and sign-in forms whose submissions are served by local
//! mocks with simulated latency.
//!
//! This crate contains pages, components, form state, and the wire types the
//! server's reference endpoints share.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

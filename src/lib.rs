//! # loopchat
//!
//! Leptos + WASM frontend for a single-view chat client. Replaces the
//! React chat scaffold with a Rust-native UI layer.
//!
//! This crate contains the root application component, the `ChatView`
//! component, client-side chat state, the REST helper for loading message
//! history, and the injected runtime configuration.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}

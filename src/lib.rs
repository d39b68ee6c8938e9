//! # lang-portal-ui
//!
//! Leptos + WASM frontend for the language-learning portal's study sessions.
//!
//! This crate contains pages, components, route-scoped state, and the REST
//! client for the portal backend. The `hydrate` feature builds the browser
//! bundle; the `ssr` feature is linked by the `server` host for rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

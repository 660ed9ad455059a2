//! # client
//!
//! Leptos web shell for the portal. Compiled with `ssr` into the server and
//! with `hydrate` into the browser bundle.
//!
//! The only non-trivial logic here is hosting the session guard on the
//! display side (`util::route_guard`); the guard itself lives in the `guard`
//! crate. Everything else is routing, view state and placeholder pages.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
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

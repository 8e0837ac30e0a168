//! # portfolio-client
//!
//! Leptos + WASM frontend for a personal portfolio page: themed navbar with
//! scrollspy, scroll-to-top control, and a project gallery loaded from
//! `projects.json` with multi-skill filtering.
//!
//! Built with `hydrate` for the browser bundle and `ssr` for the host server.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

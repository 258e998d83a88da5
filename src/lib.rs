//! # portfolio
//!
//! Leptos + WASM front end for a personal portfolio site.
//!
//! The engineering core is the theme controller in [`theme`]: a light / dark
//! / system preference persisted in a cookie, resolved against the OS color
//! scheme, and applied to `<html>`. [`state`] and [`components`] bind it to
//! Leptos; [`util`] holds the browser glue. [`content`] models the site's
//! section data and its derived views.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! `storefront-app`
//!
//! **Responsibility:** Browser frontend for the storefront.
//!
//! A client-side rendered Leptos app: fetch the product listing once per
//! mount, decorate it with a synthetic stock flag, and render a responsive
//! grid of product cards. Everything renders in the browser, so the whole
//! crate is gated on `wasm32`.

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod loader;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Better panic messages in the browser console.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}

//! Web UI for reclist-rs
//!
//! A Yew-based single-page interface that fetches record collections from
//! the local record service and renders them as lists.

mod app;
pub mod components;
pub mod fetch;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}

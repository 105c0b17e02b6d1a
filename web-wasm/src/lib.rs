//! Portfolio Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod dom;

use wasm_bindgen::prelude::*;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(app::App);
}

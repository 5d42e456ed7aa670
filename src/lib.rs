// lib.rs - Root module for the tracked library
//
// The whole application lives under web_app; pure modules (model,
// results, export, ulp) compile with no features enabled, which is
// what the default test targets build against.

pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}

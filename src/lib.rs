#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod capability;
pub mod config;
pub mod content;
pub mod decor;
pub mod paths;
pub mod sections;
pub mod submission;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(App);
}

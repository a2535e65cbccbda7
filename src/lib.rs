#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod reveal;
pub mod sections;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // the console is the only log sink in the browser
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(App);
}

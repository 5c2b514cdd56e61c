#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod motion;
pub mod nav;
pub mod profile;
pub mod skills;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the logger is already up.
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

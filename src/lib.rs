#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod cosmetics;
pub mod data;
pub mod error;
pub mod loading;
pub mod projects;
pub mod reveal;
pub mod scroll_spy;

pub use error::SiteError;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("failed to init logger: {e}");
    }
    leptos::mount::hydrate_body(App);
}

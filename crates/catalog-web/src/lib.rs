//! GeneralPhones Web Frontend
//!
//! Leptos-based WASM homepage: header, search hero, brand filters,
//! product grid and footer.

mod app;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

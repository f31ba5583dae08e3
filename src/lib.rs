//! # doc-cards
//!
//! Leptos link-card components for documentation sites.
//!
//! `Card` renders a single navigable tile and `CardGroup` lays cards out in a
//! fixed number of columns. The class names they emit (`card`, `icon-<icon>`,
//! `card-group cols-<n>`) are the contract consumed by `style/cards.css`.
//! `CardList` renders a JSON card manifest through the same two components.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: hydrates the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(app::App);
}

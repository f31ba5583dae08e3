//! Documentation landing page.
//!
//! Renders the card manifest bundled from `content/cards.json`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::card_list::CardList;
use crate::util::manifest::parse_manifest;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

const HOME_MANIFEST: &str = include_str!("../../content/cards.json");

/// Landing page listing the top-level documentation sections.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="docs-home">
            <h1>"Documentation"</h1>
            {home_content(HOME_MANIFEST)}
        </main>
    }
}

/// Card list for `manifest_json`, or an error note when it does not parse.
fn home_content(manifest_json: &str) -> impl IntoView + use<> {
    match parse_manifest(manifest_json) {
        Ok(manifest) => view! { <CardList manifest=manifest/> }.into_any(),
        Err(e) => {
            log::error!("home page card manifest is invalid: {e}");
            view! { <p class="docs-home__error">"Documentation sections are unavailable."</p> }
                .into_any()
        }
    }
}

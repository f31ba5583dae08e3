//! Navigable link card.
//!
//! DESIGN
//! ======
//! Navigation is owned entirely by the router's `<A>`: internal paths become
//! client-side transitions, everything else a full page load. The card does
//! not inspect or validate `href`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::class_name::{CARD_CLASS, icon_class};

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

/// A clickable card with a heading, an icon glyph, and a body paragraph.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(into)] icon: String,
    #[prop(into)] href: String,
    children: Children,
) -> impl IntoView {
    let glyph_class = icon_class(&icon);

    view! {
        <A href=href attr:class=CARD_CLASS>
            <h3>{title}</h3>
            <span class=glyph_class></span>
            <p>{children()}</p>
        </A>
    }
}

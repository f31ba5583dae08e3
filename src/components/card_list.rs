//! Manifest-driven card group.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that describe their cards as data render them here, so manifest cards
//! and hand-written `Card`s share one markup path.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::card_group::CardGroup;
use crate::util::manifest::{CardEntry, CardManifest};
use crate::util::markdown::render_inline_markdown;

#[cfg(test)]
#[path = "card_list_test.rs"]
mod card_list_test;

/// Renders every manifest entry as a `Card` inside one `CardGroup`.
#[component]
pub fn CardList(manifest: CardManifest) -> impl IntoView {
    let CardManifest { cols, cards } = manifest;
    let cards = cards.into_iter().map(entry_view).collect_view();

    view! { <CardGroup cols=cols>{cards}</CardGroup> }
}

fn entry_view(entry: CardEntry) -> impl IntoView {
    let CardEntry { title, icon, href, body } = entry;
    let body_html = render_inline_markdown(&body);

    view! {
        <Card title=title icon=icon href=href>
            <span class="card__body" inner_html=body_html></span>
        </Card>
    }
}

//! Column layout container for cards.

use leptos::prelude::*;

use crate::util::class_name::card_group_class;

#[cfg(test)]
#[path = "card_group_test.rs"]
mod card_group_test;

/// Wraps children in a container whose class selects the column layout.
///
/// Children are rendered unmodified and in order; the stylesheet does the
/// actual layout.
#[component]
pub fn CardGroup(cols: u32, children: Children) -> impl IntoView {
    view! { <div class=card_group_class(cols)>{children()}</div> }
}

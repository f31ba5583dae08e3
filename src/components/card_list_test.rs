#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::util::manifest::parse_manifest;

fn render_list(manifest: CardManifest) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        view! {
            <Router>
                <CardList manifest=manifest/>
            </Router>
        }
        .to_html()
    })
}

fn sample_manifest() -> CardManifest {
    parse_manifest(
        r#"{"cols": 2, "cards": [
            {"title": "Guide", "icon": "book", "href": "/guide", "body": "Learn the **basics**"},
            {"title": "API", "icon": "code", "href": "/api", "body": "Reference"}
        ]}"#,
    )
    .expect("manifest should parse")
}

#[test]
fn card_list_wraps_cards_in_group() {
    let html = render_list(sample_manifest());
    assert!(html.contains(r#"class="card-group cols-2""#), "{html}");
    assert_eq!(html.matches("<a ").count(), 2);
}

#[test]
fn card_list_preserves_manifest_order() {
    let html = render_list(sample_manifest());
    let guide = html.find(r#"href="/guide""#).expect("guide card");
    let api = html.find(r#"href="/api""#).expect("api card");
    assert!(guide < api);
}

#[test]
fn card_list_renders_body_markdown() {
    let html = render_list(sample_manifest());
    assert!(html.contains("Learn the <strong>basics</strong>"), "{html}");
    assert!(html.contains(r#"class="icon-code""#), "{html}");
}

#[test]
fn card_list_renders_empty_group() {
    let html = render_list(CardManifest { cols: 3, cards: Vec::new() });
    assert!(html.contains(r#"class="card-group cols-3""#), "{html}");
    assert_eq!(html.matches("<a ").count(), 0);
}

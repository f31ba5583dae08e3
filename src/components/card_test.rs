#![cfg(feature = "ssr")]

use leptos::tachys::view::RenderHtml;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;

fn render_card(title: &'static str, icon: &'static str, href: &'static str, body: &'static str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/"));
        view! {
            <Router>
                <Card title=title icon=icon href=href>{body}</Card>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn card_links_to_href_with_card_class() {
    let html = render_card("Guide", "book", "/guide", "Learn the basics");
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains(r#"href="/guide""#), "{html}");
    assert!(html.contains(r#"class="card""#), "{html}");
}

#[test]
fn card_renders_heading_glyph_and_paragraph_in_order() {
    let html = render_card("Guide", "book", "/guide", "Learn the basics");
    let heading = html.find("<h3>Guide</h3>").expect("heading");
    let glyph = html.find(r#"class="icon-book""#).expect("glyph");
    let paragraph = html.find("<p>").expect("paragraph");
    let body = html.find("Learn the basics").expect("body");
    let paragraph_end = html.find("</p>").expect("paragraph end");
    assert!(heading < glyph && glyph < paragraph);
    assert!(paragraph < body && body < paragraph_end);
}

#[test]
fn card_glyph_class_is_prefixed_icon() {
    let html = render_card("Launch", "rocket", "/launch", "Go");
    assert!(html.contains(r#"class="icon-rocket""#), "{html}");
}

#[test]
fn card_passes_external_href_through() {
    let html = render_card("Source", "github", "https://github.com/example/docs", "Code");
    assert!(html.contains(r#"href="https://github.com/example/docs""#), "{html}");
}

#[test]
fn card_render_is_idempotent() {
    let first = render_card("Guide", "book", "/guide", "Learn the basics");
    let second = render_card("Guide", "book", "/guide", "Learn the basics");
    assert_eq!(first, second);
}

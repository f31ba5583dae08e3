//! Inline markdown rendering for card bodies.
//!
//! Card bodies sit inside the `<p>` that `Card` already renders, so every
//! block construct is flattened: paragraphs, headings, lists, quotes and rules
//! collapse to their text joined by single spaces, and code blocks become
//! inline `<code>`.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render `markdown` to inline HTML suitable for a card paragraph.
pub fn render_inline_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut wrote_inline = false;
    let mut in_code_block = false;
    // Raw HTML is dropped; bodies come from manifests, not trusted markup.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_)
        | Event::InlineHtml(_)
        | Event::Start(Tag::HtmlBlock)
        | Event::End(
            TagEnd::Paragraph
            | TagEnd::Heading { .. }
            | TagEnd::BlockQuote { .. }
            | TagEnd::List { .. }
            | TagEnd::Item
            | TagEnd::HtmlBlock,
        ) => None,
        Event::Start(Tag::CodeBlock { .. }) => {
            in_code_block = true;
            block_separator(&mut wrote_inline)
        }
        Event::End(TagEnd::CodeBlock) => {
            in_code_block = false;
            None
        }
        Event::Start(
            Tag::Paragraph | Tag::Heading { .. } | Tag::BlockQuote { .. } | Tag::List { .. } | Tag::Item,
        )
        | Event::Rule => block_separator(&mut wrote_inline),
        Event::Text(text) if in_code_block => {
            wrote_inline = true;
            Some(Event::Code(CowStr::from(text.trim_end_matches('\n').to_owned())))
        }
        other => {
            wrote_inline = true;
            Some(other)
        }
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out.trim().to_owned()
}

/// A single space between flattened blocks, only once inline content exists.
fn block_separator(wrote_inline: &mut bool) -> Option<Event<'static>> {
    std::mem::take(wrote_inline).then_some(Event::Text(CowStr::Borrowed(" ")))
}

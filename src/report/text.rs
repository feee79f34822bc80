//! Markup-stripped text extraction
//!
//! Walks the parsed HTML tree in document order and collects trimmed,
//! non-empty text nodes as lines. Content nested anywhere inside
//! script/style/noscript is dropped entirely. html5ever's error recovery
//! means malformed or unterminated markup degrades to partial extraction
//! instead of failing.

use scraper::{ElementRef, Html};

const SKIP_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Extract the ordered sequence of text lines from raw HTML.
pub fn extract_text_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();
    collect_text(document.root_element(), &mut lines);
    lines
}

fn collect_text(element: ElementRef, lines: &mut Vec<String>) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, lines);
        } else if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
    }
}

//! Visible-text extraction from HTML.
//!
//! Synchronous (scraper's `Html` is not `Send`); callers on the async
//! runtime should wrap it in `tokio::task::spawn_blocking`.

use scraper::{Html, Node};

/// Elements whose text never reaches the reader.
const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract the visible text of an HTML document.
///
/// Text nodes are joined with `\n` in document order. Whitespace-only nodes
/// and anything inside a non-content element are dropped. The result is
/// trimmed.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        if text.trim().is_empty() {
            continue;
        }
        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(el) => NON_CONTENT_ELEMENTS.contains(&el.name()),
            _ => false,
        });
        if !hidden {
            parts.push(text);
        }
    }

    parts.join("\n").trim().to_string()
}

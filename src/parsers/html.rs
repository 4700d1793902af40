use crate::error::FetchError;
use crate::results::PageContent;
use ego_tree::iter::Edge;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

/// Elements whose whole subtree is dropped from the extracted text
pub const EXCLUDED_TAGS: [&str; 4] = ["script", "style", "img", "input"];

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector is valid"));
static BODY_START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[\s/>]").expect("body tag pattern is valid"));

/// Whether the source contains a `<body>` start tag
///
/// html5ever inserts a body into every document, so an absent body has to be
/// detected on the raw input.
pub fn has_body_tag(html: &str) -> bool {
    BODY_START_TAG.is_match(html)
}

/// Parses an HTML document into its title and cleaned body text
///
/// Fails with [`FetchError::MissingBody`] when the document has no `<body>`.
pub fn parse_page(url: &str, html: &str) -> Result<PageContent, FetchError> {
    if !has_body_tag(html) {
        return Err(FetchError::MissingBody(url.to_string()));
    }

    let doc = Html::parse_document(html);

    let title = extract_title(&doc);
    ::log::debug!("Extracted title {:?} from {}", title, url);

    let body = doc
        .select(&BODY_SELECTOR)
        .next()
        .ok_or_else(|| FetchError::MissingBody(url.to_string()))?;
    let text = extract_text(body);
    ::log::debug!("Extracted {} bytes of text from {}", text.len(), url);

    Ok(PageContent::new(url.to_string(), title, text))
}

/// Text of the first `<title>` element, exactly as written
pub fn extract_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect::<String>())
}

/// Text under `element`, skipping excluded subtrees and comments
///
/// Each text node is trimmed; empty ones are dropped and the rest are
/// joined with newlines in document order.
pub fn extract_text(element: ElementRef<'_>) -> String {
    let mut lines = Vec::new();
    // Number of excluded elements currently open
    let mut excluded_depth = 0usize;

    for edge in element.traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) if excluded_depth > 0 || is_excluded(el.name()) => {
                    excluded_depth += 1;
                }
                Node::Text(text) if excluded_depth == 0 => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        lines.push(trimmed);
                    }
                }
                _ => {}
            },
            Edge::Close(node) => {
                if excluded_depth > 0 && node.value().is_element() {
                    excluded_depth -= 1;
                }
            }
        }
    }

    lines.join("\n")
}

fn is_excluded(name: &str) -> bool {
    EXCLUDED_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

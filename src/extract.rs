use scraper::{ElementRef, Html, Selector};

use crate::tokenizer::normalize_whitespace;

/// Title used when the page offers none.
pub const TITLE_PLACEHOLDER: &str = "Title not found";

/// Containers that usually hold the article body, most specific first.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role=\"main\"]",
    ".content",
    ".article-content",
    ".post-content",
    ".entry-content",
    "main",
    ".main-content",
];

/// Title and readable body text pulled out of an HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Whitespace-normalized body text, possibly empty.
    pub body: String,
}

/// Extracts the title and body text from a raw HTML document.
///
/// The body comes from the first content selector that matches anything.
/// When none match, or the match holds no text, every `<p>` is used instead.
pub fn extract_article(html: &str) -> Article {
    let document = Html::parse_document(html);
    Article {
        title: extract_title(&document),
        body: extract_body(&document),
    }
}

fn extract_title(document: &Html) -> String {
    select_text(document, "title")
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| {
            select_all(document, "h1")
                .next()
                .map(|h1| element_text(&h1).trim().to_string())
                .filter(|t| !t.is_empty())
        })
        .or_else(|| {
            // Only the first og:title tag counts, even if it lacks content.
            select_all(document, "meta[property=\"og:title\"]")
                .next()
                .and_then(|meta| meta.value().attr("content"))
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

fn extract_body(document: &Html) -> String {
    let mut content = String::new();

    for selector in CONTENT_SELECTORS {
        if let Some(text) = select_text(document, selector) {
            tracing::debug!("content selector '{}' matched", selector);
            content = text.trim().to_string();
            break;
        }
    }

    if content.is_empty() {
        tracing::debug!("no content container found, falling back to <p> elements");
        content = select_all(document, "p")
            .map(|p| element_text(&p).trim().to_string())
            .collect::<Vec<_>>()
            .join(" ");
    }

    normalize_whitespace(&content)
}

/// Concatenated text of every element matching `selector`, or `None` when
/// nothing matches.
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let mut matches = select_all(document, selector).peekable();
    matches.peek()?;
    Some(matches.map(|el| element_text(&el)).collect())
}

fn select_all<'a>(
    document: &'a Html,
    selector: &str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let parsed = Selector::parse(selector).ok();
    if parsed.is_none() {
        tracing::warn!("invalid CSS selector: {}", selector);
    }
    // Selection borrows the selector, so collect before it is dropped.
    parsed
        .map(|sel| document.select(&sel).collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

use crate::dom::DomElement;
use crate::results::PageMetadata;

/// Reads the page title and meta description.
///
/// `page_url` is reported back verbatim.
pub fn extract<'a, E: DomElement<'a>>(root: E, page_url: &str) -> PageMetadata {
    PageMetadata {
        title: title(root),
        description: description(root),
        url: page_url.to_string(),
    }
}

/// Trimmed text of the first `title` element, or empty
pub fn title<'a, E: DomElement<'a>>(root: E) -> String {
    root.find("title")
        .map(|title| title.raw_text().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed `content` of the first `<meta name="description">`, matched
/// case-insensitively. Later description tags are ignored even when the
/// first one has no content.
pub fn description<'a, E: DomElement<'a>>(root: E) -> String {
    root.find_all(&["meta"])
        .into_iter()
        .find(|meta| {
            meta.attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|meta| meta.attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

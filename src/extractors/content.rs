use crate::dom::DomElement;
use crate::domain::DomainClassifier;
use crate::results::{ContentElement, LinkType};

/// Tags that make up the content stream
pub const CONTENT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "a"];

/// Content stream of a page with its running counters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentExtraction {
    pub elements: Vec<ContentElement>,
    pub text_count: usize,
    pub inner_link_count: usize,
    pub outer_link_count: usize,
}

impl ContentExtraction {
    fn push_text(&mut self, tag: &str, content: String) {
        self.elements.push(ContentElement::text(tag, content));
        self.text_count += 1;
    }

    fn push_link(&mut self, content: String, href: &str, link_type: LinkType) {
        match link_type {
            LinkType::Inner => self.inner_link_count += 1,
            LinkType::Outer => self.outer_link_count += 1,
        }
        self.elements
            .push(ContentElement::link(content, href, link_type));
    }
}

/// Walks headings, paragraphs, list items and anchors in document order.
///
/// Anchors with a non-empty `href` become links; everything else, anchors
/// without `href` included, becomes text. Nested matches each produce their
/// own entry, so `<li><a href="/x">X</a></li>` yields a text and a link.
pub fn extract<'a, E: DomElement<'a>>(root: E, classifier: &DomainClassifier) -> ContentExtraction {
    let mut extraction = ContentExtraction::default();

    for element in root.find_all(CONTENT_TAGS) {
        let tag = element.tag_name();
        let content = element.text_content();

        match element.attr("href") {
            Some(href) if tag == "a" && !href.is_empty() => {
                let link_type = classifier.classify(href);
                extraction.push_link(content, href, link_type);
            }
            _ => extraction.push_text(tag, content),
        }
    }

    ::log::debug!(
        "Content extraction found {} text items, {} inner links, {} outer links",
        extraction.text_count,
        extraction.inner_link_count,
        extraction.outer_link_count
    );

    extraction
}

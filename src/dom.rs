use crate::utils::collapse_whitespace;
use scraper::{ElementRef, Node};

/// Tags stripped from a document before extraction
pub const DEFAULT_NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer"];

/// A child of an element: either a nested element or a run of text
pub enum DomChild<'a, E> {
    Element(E),
    Text(&'a str),
}

/// Read-only view of a parsed HTML element.
///
/// The extractors only ever talk to a document through this trait, so any
/// parser able to hand out tag names, attributes and ordered children can
/// drive them. Handles are cheap copies borrowing from a tree that outlives
/// them (`'a`).
pub trait DomElement<'a>: Copy {
    /// Lowercase local name, e.g. `"a"` or `"h1"`
    fn tag_name(&self) -> &'a str;

    /// Value of an attribute, if present
    fn attr(&self, name: &str) -> Option<&'a str>;

    /// Element and text children in document order
    fn child_nodes(&self) -> Vec<DomChild<'a, Self>>;

    /// Element children in document order
    fn element_children(&self) -> Vec<Self> {
        self.child_nodes()
            .into_iter()
            .filter_map(|child| match child {
                DomChild::Element(element) => Some(element),
                DomChild::Text(_) => None,
            })
            .collect()
    }

    /// Every element below this one in document (pre-)order, excluding itself
    fn descendant_elements(&self) -> Vec<Self> {
        let mut found = Vec::new();
        let mut stack: Vec<Self> = self.element_children().into_iter().rev().collect();

        while let Some(element) = stack.pop() {
            found.push(element);
            stack.extend(element.element_children().into_iter().rev());
        }

        found
    }

    /// Descendants whose tag is one of `tags`, in document order
    fn find_all(&self, tags: &[&str]) -> Vec<Self> {
        self.descendant_elements()
            .into_iter()
            .filter(|element| tags.contains(&element.tag_name()))
            .collect()
    }

    /// First descendant with the given tag
    fn find(&self, tag: &str) -> Option<Self> {
        self.descendant_elements()
            .into_iter()
            .find(|element| element.tag_name() == tag)
    }

    /// Concatenated descendant text with whitespace runs collapsed
    fn text_content(&self) -> String {
        collapse_whitespace(&self.raw_text())
    }

    /// Concatenated descendant text, untouched
    fn raw_text(&self) -> String {
        let mut text = String::new();
        let mut stack: Vec<DomChild<'a, Self>> = self.child_nodes().into_iter().rev().collect();

        while let Some(child) = stack.pop() {
            match child {
                DomChild::Text(run) => text.push_str(run),
                DomChild::Element(element) => {
                    stack.extend(element.child_nodes().into_iter().rev());
                }
            }
        }

        text
    }
}

impl<'a> DomElement<'a> for ElementRef<'a> {
    fn tag_name(&self) -> &'a str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn child_nodes(&self) -> Vec<DomChild<'a, Self>> {
        self.children()
            .filter_map(|child| match child.value() {
                Node::Text(text) => Some(DomChild::Text(&**text)),
                Node::Element(_) => ElementRef::wrap(child).map(DomChild::Element),
                // Comments, doctypes and processing instructions carry no content
                _ => None,
            })
            .collect()
    }
}

/// Set of tag names whose subtrees are hidden from extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilter {
    tags: Vec<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_TAGS)
    }
}

impl NoiseFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_ascii_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }

    pub fn is_noise(&self, tag: &str) -> bool {
        self.tags.iter().any(|noise| noise.eq_ignore_ascii_case(tag))
    }

    /// View of `root` with every noise subtree removed
    pub fn strip<E>(&self, root: E) -> Pruned<'_, E> {
        Pruned {
            inner: root,
            noise: self,
        }
    }
}

/// An element seen through a [`NoiseFilter`].
///
/// Noise children (and everything below them) are skipped, leaving the
/// underlying tree untouched.
#[derive(Clone, Copy)]
pub struct Pruned<'f, E> {
    inner: E,
    noise: &'f NoiseFilter,
}

impl<E> Pruned<'_, E> {
    /// The unfiltered element behind this view
    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<'a, E: DomElement<'a>> DomElement<'a> for Pruned<'_, E> {
    fn tag_name(&self) -> &'a str {
        self.inner.tag_name()
    }

    fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.attr(name)
    }

    fn child_nodes(&self) -> Vec<DomChild<'a, Self>> {
        self.inner
            .child_nodes()
            .into_iter()
            .filter_map(|child| match child {
                DomChild::Element(element) if self.noise.is_noise(element.tag_name()) => None,
                DomChild::Element(element) => Some(DomChild::Element(Pruned {
                    inner: element,
                    noise: self.noise,
                })),
                DomChild::Text(text) => Some(DomChild::Text(text)),
            })
            .collect()
    }
}

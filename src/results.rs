use serde::{Deserialize, Serialize};

/// Whether a link stays on the page's registrable domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Same registrable domain as the page
    Inner,
    /// Any other target, including hrefs without a resolvable host
    Outer,
}

/// One entry of the flat content stream, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentElement {
    /// Heading, paragraph, list item, or an anchor without `href`
    Text { content: String, tag: String },

    /// Anchor carrying a non-empty `href`
    Link {
        content: String,
        href: String,
        tag: String,
        link_type: LinkType,
    },
}

impl ContentElement {
    /// Create a text entry for the given tag
    pub fn text(tag: &str, content: String) -> Self {
        Self::Text {
            content,
            tag: tag.to_string(),
        }
    }

    /// Create a link entry; links always come from anchors
    pub fn link(content: String, href: &str, link_type: LinkType) -> Self {
        Self::Link {
            content,
            href: href.to_string(),
            tag: "a".to_string(),
            link_type,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Text { content, .. } | Self::Link { content, .. } => content,
        }
    }

    /// Link classification, or `None` for text entries
    pub fn link_type(&self) -> Option<LinkType> {
        match self {
            Self::Text { .. } => None,
            Self::Link { link_type, .. } => Some(*link_type),
        }
    }
}

/// A form field (`input`, `select` or `textarea`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(rename = "type")]
    pub input_type: String,
    pub name: String,
}

/// An `input` or `button` whose type is `submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitControl {
    #[serde(rename = "type")]
    pub control_type: String,
    pub value: String,
    pub name: String,
}

impl SubmitControl {
    pub fn new(value: &str, name: &str) -> Self {
        Self {
            control_type: "submit".to_string(),
            value: value.to_string(),
            name: name.to_string(),
        }
    }
}

/// A form with its resolved action and fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Absolute action URL, or empty when the form has no action
    pub action: String,
    pub method: String,
    pub inputs: Vec<FormInput>,
    pub submit_buttons: Vec<SubmitControl>,
}

/// Row-major cell text of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub rows: Vec<Vec<String>>,
}

/// Title, description and source URL of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// The page URL exactly as passed to the extraction call
    pub url: String,
}

/// Counters over the extracted content plus page metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total_text_items: usize,
    pub total_inner_links: usize,
    pub total_outer_links: usize,
    pub total_forms: usize,
    pub total_tables: usize,
    pub metadata: PageMetadata,
}

/// Structured summary of a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub summary: ExtractionSummary,
    pub content: Vec<ContentElement>,
    pub forms: Vec<FormRecord>,
    pub tables: Vec<TableRecord>,
}

/// What a caller gets back: a summary, or the reason there is none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionResponse {
    Success(ExtractionResult),
    Failure { error: String },
}

impl ExtractionResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The extraction result, if the page could be summarized
    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            Self::Success(result) => Some(result),
            Self::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_element_json_shape() {
        let text = ContentElement::text("p", "Hello".to_string());
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"type": "text", "content": "Hello", "tag": "p"})
        );

        let link = ContentElement::link("Docs".to_string(), "/docs", LinkType::Inner);
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "type": "link",
                "content": "Docs",
                "href": "/docs",
                "tag": "a",
                "link_type": "inner"
            })
        );
    }

    #[test]
    fn test_form_json_shape() {
        let form = FormRecord {
            action: "https://a.example/login".to_string(),
            method: "POST".to_string(),
            inputs: vec![FormInput {
                input_type: "password".to_string(),
                name: "pw".to_string(),
            }],
            submit_buttons: vec![SubmitControl::new("Go", "")],
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({
                "action": "https://a.example/login",
                "method": "POST",
                "inputs": [{"type": "password", "name": "pw"}],
                "submit_buttons": [{"type": "submit", "value": "Go", "name": ""}]
            })
        );
    }

    #[test]
    fn test_failure_response_shape() {
        let response = ExtractionResponse::failure("boom");
        assert!(response.is_failure());
        assert!(response.result().is_none());
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"error":"boom"}"#
        );

        let parsed: ExtractionResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed, response);
    }
}

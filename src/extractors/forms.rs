use crate::dom::DomElement;
use crate::domain::DomainClassifier;
use crate::results::{FormInput, FormRecord, SubmitControl};

/// Elements reported as form fields
pub const FIELD_TAGS: &[&str] = &["input", "select", "textarea"];

/// Elements that can submit a form
pub const SUBMIT_TAGS: &[&str] = &["input", "button"];

/// Extracts every form in document order
pub fn extract<'a, E: DomElement<'a>>(root: E, classifier: &DomainClassifier) -> Vec<FormRecord> {
    let forms: Vec<FormRecord> = root
        .find_all(&["form"])
        .into_iter()
        .map(|form| extract_form(form, classifier))
        .collect();

    ::log::debug!("Form extraction found {} forms", forms.len());
    forms
}

/// Builds the record for a single form element
pub fn extract_form<'a, E: DomElement<'a>>(form: E, classifier: &DomainClassifier) -> FormRecord {
    FormRecord {
        action: resolve_action(form.attr("action").unwrap_or_default(), classifier),
        method: form.attr("method").unwrap_or("GET").to_uppercase(),
        inputs: form
            .find_all(FIELD_TAGS)
            .into_iter()
            .map(|field| FormInput {
                input_type: field.attr("type").unwrap_or("text").to_string(),
                name: field.attr("name").unwrap_or_default().to_string(),
            })
            .collect(),
        submit_buttons: form
            .find_all(SUBMIT_TAGS)
            .into_iter()
            .filter(|control| control.attr("type") == Some("submit"))
            .map(|control| {
                SubmitControl::new(
                    control.attr("value").unwrap_or_default(),
                    control.attr("name").unwrap_or_default(),
                )
            })
            .collect(),
    }
}

/// An empty action stays empty; anything else is made absolute, or kept as
/// written when the page URL gives nothing to resolve against.
fn resolve_action(action: &str, classifier: &DomainClassifier) -> String {
    if action.is_empty() {
        return String::new();
    }

    match classifier.resolve(action) {
        Some(resolved) => resolved.to_string(),
        None => {
            ::log::debug!("Keeping unresolvable form action as written: {}", action);
            action.to_string()
        }
    }
}

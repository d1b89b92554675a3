use crate::dom::NoiseFilter;
use crate::domain::DomainClassifier;
use crate::extractors::forms;
use crate::results::{FormInput, FormRecord, SubmitControl};
use scraper::Html;

#[cfg(test)]
mod form_extraction_tests {
    use super::*;

    fn extract(html: &str, page_url: &str) -> Vec<FormRecord> {
        let doc = Html::parse_document(html);
        let filter = NoiseFilter::default();
        forms::extract(filter.strip(doc.root_element()), &DomainClassifier::new(page_url))
    }

    fn input(input_type: &str, name: &str) -> FormInput {
        FormInput {
            input_type: input_type.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_fields_and_submit_controls() {
        let html = r#"
            <form action="/submit" method="post">
                <input name="q">
                <input type="email" name="mail">
                <select name="size"><option>1</option></select>
                <textarea></textarea>
                <input type="submit" value="Go" name="go">
                <button type="submit">Send</button>
                <button>Plain</button>
            </form>
        "#;
        let forms = extract(html, "https://a.example/p");

        assert_eq!(
            forms,
            vec![FormRecord {
                action: "https://a.example/submit".to_string(),
                method: "POST".to_string(),
                inputs: vec![
                    input("text", "q"),
                    input("email", "mail"),
                    input("text", "size"),
                    input("text", ""),
                    input("submit", "go"),
                ],
                submit_buttons: vec![SubmitControl::new("Go", "go"), SubmitControl::new("", "")],
            }]
        );
    }

    #[test]
    fn test_empty_action_stays_empty() {
        let forms = extract(
            r#"<form action=""><input type="hidden" name="t"></form>"#,
            "https://a.example/p",
        );
        assert_eq!(forms[0].action, "");
        assert_eq!(forms[0].method, "GET");
        assert_eq!(forms[0].inputs, vec![input("hidden", "t")]);
        assert!(forms[0].submit_buttons.is_empty());
    }

    #[test]
    fn test_missing_action_stays_empty() {
        let forms = extract("<form></form>", "https://a.example/p");
        assert_eq!(
            forms,
            vec![FormRecord {
                action: String::new(),
                method: "GET".to_string(),
                inputs: Vec::new(),
                submit_buttons: Vec::new(),
            }]
        );
    }

    #[test]
    fn test_relative_action_resolution() {
        let forms = extract(
            r#"<form action="next"></form><form action="https://b.example/x" method="Get"></form>"#,
            "https://a.example/dir/page",
        );
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].action, "https://a.example/dir/next");
        assert_eq!(forms[1].action, "https://b.example/x");
        assert_eq!(forms[1].method, "GET");
    }

    #[test]
    fn test_unresolvable_action_is_kept() {
        let forms = extract(r#"<form action="/submit"></form>"#, "not a url");
        assert_eq!(forms[0].action, "/submit");
    }

    #[test]
    fn test_explicitly_empty_method() {
        let forms = extract(r#"<form method=""></form>"#, "https://a.example/");
        assert_eq!(forms[0].method, "");
    }

    #[test]
    fn test_submit_type_is_case_sensitive() {
        let forms = extract(
            r#"<form><input type="SUBMIT" value="A"><input type="submit" value="B"></form>"#,
            "https://a.example/",
        );
        assert_eq!(forms[0].submit_buttons, vec![SubmitControl::new("B", "")]);
        assert_eq!(forms[0].inputs.len(), 2);
    }
}

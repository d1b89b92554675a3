use crate::dom::NoiseFilter;
use crate::extractors::metadata;
use crate::results::PageMetadata;
use scraper::Html;

#[cfg(test)]
mod metadata_extraction_tests {
    use super::*;

    fn extract(html: &str, page_url: &str) -> PageMetadata {
        let doc = Html::parse_document(html);
        let filter = NoiseFilter::default();
        metadata::extract(filter.strip(doc.root_element()), page_url)
    }

    #[test]
    fn test_missing_title_and_description() {
        let metadata = extract("<p>No head here</p>", "https://a.example/p");
        assert_eq!(
            metadata,
            PageMetadata {
                title: String::new(),
                description: String::new(),
                url: "https://a.example/p".to_string(),
            }
        );
    }

    #[test]
    fn test_title_and_description_are_trimmed() {
        let html = r#"
            <head>
                <title>  My Page
                </title>
                <meta property="og:description" content="Open Graph">
                <meta name="Description" content="  About us ">
                <meta name="description" content="second">
            </head>
        "#;
        let metadata = extract(html, "https://a.example/");
        assert_eq!(metadata.title, "My Page");
        assert_eq!(metadata.description, "About us");
    }

    #[test]
    fn test_first_description_wins_even_without_content() {
        let html = r#"<meta name="description"><meta name="description" content="later">"#;
        let metadata = extract(html, "https://a.example/");
        assert_eq!(metadata.description, "");
    }

    #[test]
    fn test_url_is_reported_verbatim() {
        let metadata = extract("<title>T</title>", "HTTPS://A.example/Path?q=1#frag");
        assert_eq!(metadata.url, "HTTPS://A.example/Path?q=1#frag");
    }
}

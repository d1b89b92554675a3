pub mod content;
pub mod forms;
pub mod metadata;
pub mod tables;

#[cfg(test)]
mod tests;

use crate::config::ExtractorConfig;
use crate::dom::{DomElement, NoiseFilter};
use crate::domain::DomainClassifier;
use crate::results::{ExtractionResult, ExtractionSummary};
use scraper::Html;

/// Runs every extractor over one document and assembles the result.
///
/// Holds no per-page state: one `Extractor` can serve any number of pages,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    noise: NoiseFilter,
}

impl Extractor {
    /// Create an extractor from configuration
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            noise: NoiseFilter::new(&config.noise_tags),
        }
    }

    /// Create an extractor that strips the given noise tags
    pub fn with_noise_filter(noise: NoiseFilter) -> Self {
        Self { noise }
    }

    pub fn noise_filter(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Parse `html` and extract it as the page at `page_url`
    pub fn extract_html(&self, html: &str, page_url: &str) -> ExtractionResult {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            ::log::trace!(
                "Parser recovered from {} markup errors on {}",
                document.errors.len(),
                page_url
            );
        }
        self.extract(document.root_element(), page_url)
    }

    /// Extract an already parsed document.
    ///
    /// Noise subtrees are hidden before any extractor runs, so their text,
    /// links, forms and tables never reach the result.
    pub fn extract<'a, E: DomElement<'a>>(&self, root: E, page_url: &str) -> ExtractionResult {
        ::log::debug!("Extracting content from {}", page_url);

        let root = self.noise.strip(root);
        let classifier = DomainClassifier::new(page_url);

        let content = content::extract(root, &classifier);
        let forms = forms::extract(root, &classifier);
        let tables = tables::extract(root);
        let metadata = metadata::extract(root, page_url);

        let summary = ExtractionSummary {
            total_text_items: content.text_count,
            total_inner_links: content.inner_link_count,
            total_outer_links: content.outer_link_count,
            total_forms: forms.len(),
            total_tables: tables.len(),
            metadata,
        };

        ::log::info!(
            "Extracted {}: {} text items, {} inner links, {} outer links, {} forms, {} tables",
            page_url,
            summary.total_text_items,
            summary.total_inner_links,
            summary.total_outer_links,
            summary.total_forms,
            summary.total_tables
        );

        ExtractionResult {
            summary,
            content: content.elements,
            forms,
            tables,
        }
    }
}

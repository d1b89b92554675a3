use crate::results::LinkType;
use url::{Host, Url};

/// Registrable domain (label + public suffix) of a URL, e.g.
/// `https://www.a.example.co.uk/x` -> `example.co.uk`.
///
/// Bare hosts are accepted as well. Returns an empty string when no host can
/// be found.
pub fn base_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => url_base_domain(&parsed),
        Err(_) => match Host::parse(url.trim()) {
            Ok(host) => host_base_domain(&host),
            Err(_) => String::new(),
        },
    }
}

/// Registrable domain of an already parsed URL
pub fn url_base_domain(url: &Url) -> String {
    match url.host() {
        Some(host) => host_base_domain(&host),
        None => String::new(),
    }
}

/// Registrable domain of a host.
///
/// IP addresses are their own base domain. A host that is itself a public
/// suffix (or a single label like `localhost`) is returned unchanged.
pub fn host_base_domain<S: AsRef<str>>(host: &Host<S>) -> String {
    match host {
        Host::Domain(domain) => {
            let domain: &str = domain.as_ref();
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            let registrable = psl::domain_str(&domain).map(str::to_owned);
            registrable.unwrap_or(domain)
        }
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    }
}

/// Whether `href`, resolved against `page_url`, stays on `page_base_domain`.
///
/// Empty hrefs and hrefs without a host (`mailto:`, `javascript:`) are never
/// internal.
pub fn is_internal(href: &str, page_url: &str, page_base_domain: &str) -> bool {
    let page = Url::parse(page_url).ok();
    resolves_internal(href, page.as_ref(), page_base_domain)
}

/// Resolves `href` the way a browser would from a page at `page`
fn resolve_against(href: &str, page: Option<&Url>) -> Option<Url> {
    match page {
        Some(base) => base.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}

fn resolves_internal(href: &str, page: Option<&Url>, page_base_domain: &str) -> bool {
    if href.is_empty() {
        return false;
    }

    match resolve_against(href, page) {
        Some(resolved) => {
            let link_domain = url_base_domain(&resolved);
            !link_domain.is_empty() && link_domain == page_base_domain
        }
        None => {
            ::log::trace!("Unresolvable href classified as outer: {}", href);
            false
        }
    }
}

/// Classifies links found on one page.
///
/// Parses the page URL and computes its base domain once, so each link costs
/// a single join plus a suffix lookup.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    page_url: Option<Url>,
    base_domain: String,
}

impl DomainClassifier {
    /// Create a classifier for the page at `page_url`
    pub fn new(page_url: &str) -> Self {
        let parsed = Url::parse(page_url).ok();
        if parsed.is_none() {
            ::log::warn!(
                "Page URL {:?} is not absolute; every link will be classified as outer",
                page_url
            );
        }

        let base_domain = base_domain(page_url);
        ::log::debug!("Base domain for {}: {:?}", page_url, base_domain);

        Self {
            page_url: parsed,
            base_domain,
        }
    }

    /// Registrable domain of the page
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// The parsed page URL, if it was absolute
    pub fn page_url(&self) -> Option<&Url> {
        self.page_url.as_ref()
    }

    /// Resolve a (possibly relative) reference against the page URL
    pub fn resolve(&self, href: &str) -> Option<Url> {
        resolve_against(href, self.page_url.as_ref())
    }

    pub fn is_internal(&self, href: &str) -> bool {
        resolves_internal(href, self.page_url.as_ref(), &self.base_domain)
    }

    pub fn classify(&self, href: &str) -> LinkType {
        if self.is_internal(href) {
            LinkType::Inner
        } else {
            LinkType::Outer
        }
    }
}

//! Site heuristics as data.
//!
//! Everything the resolver and extractor need to know about a specific
//! storefront's markup lives here as explicit ordered lists, so tests (or a
//! future second storefront) can substitute a fixed selector/synonym set
//! instead of relying on literal site markup scattered through the code.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters to percent-encode in search keywords. `NON_ALPHANUMERIC` minus
/// the marks that `encodeURIComponent` leaves intact.
const KEYWORD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ordered matching heuristics for one storefront.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Search URL template; `{keyword}` is replaced with the encoded query.
    pub search_url_template: String,
    /// Product-page link selectors, tried in priority order. The first is
    /// the canonical product-path pattern; the rest are fallbacks.
    pub product_link_selectors: Vec<String>,
    /// Selector list matching the page's interactive elements (buttons and
    /// ARIA-role button containers) scanned for the disclosure control.
    pub disclosure_selector: String,
    /// Label synonyms identifying the seller-information disclosure.
    pub disclosure_tokens: Vec<String>,
    /// Structural fallback selectors (accordion-trigger patterns), tried in
    /// order when the interactive scan finds nothing.
    pub disclosure_fallback_selectors: Vec<String>,
    /// Seller-related tokens the fallback elements' text must contain.
    pub disclosure_fallback_tokens: Vec<String>,
    /// Per-field label synonym lists, each tried in order.
    pub email_labels: Vec<String>,
    pub brand_labels: Vec<String>,
    pub company_labels: Vec<String>,
    pub phone_labels: Vec<String>,
    pub business_number_labels: Vec<String>,
    pub address_labels: Vec<String>,
    /// Substrings disqualifying an email candidate found by the raw-text
    /// scan (placeholder and social-media addresses).
    pub email_denylist: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl SiteProfile {
    /// Heuristics for the Musinsa storefront, the default target.
    pub fn musinsa() -> Self {
        Self {
            search_url_template: "https://www.musinsa.com/search/goods?keyword={keyword}&gf=A"
                .to_owned(),
            product_link_selectors: strings(&[
                "a[href*=\"/products/\"]",
                "a[href*=\"/product/\"]",
                "a[href*=\"/goods/\"]",
                ".product-link",
                ".goods-link",
            ]),
            disclosure_selector: "button, div[role=\"button\"], span[role=\"button\"]".to_owned(),
            disclosure_tokens: strings(&["판매자 정보", "판매자정보", "seller info", "판매정보"]),
            disclosure_fallback_selectors: strings(&[
                "[data-mds=\"AccordionTrigger\"]",
                "button[aria-controls*=\"radix\"]",
                "button[class*=\"AccordionTrigger\"]",
                "button[class*=\"accordion\"]",
                ".seller-info-btn",
                ".seller-btn",
                ".accordion-trigger",
            ]),
            disclosure_fallback_tokens: strings(&["판매자", "seller"]),
            email_labels: strings(&["E-mail", "이메일"]),
            brand_labels: strings(&["브랜드"]),
            company_labels: strings(&["상호", "대표자"]),
            phone_labels: strings(&["연락처"]),
            business_number_labels: strings(&["사업자번호"]),
            address_labels: strings(&["영업소재지", "주소"]),
            email_denylist: strings(&["noreply", "example", "test", "facebook", "instagram"]),
        }
    }

    /// Search URL for one brand-name variant, keyword percent-encoded.
    pub fn search_url(&self, name: &str) -> String {
        let encoded = utf8_percent_encode(name, KEYWORD).to_string();
        self.search_url_template.replace("{keyword}", &encoded)
    }
}

/// Fixed settle delays between pipeline steps. These timed pauses are the
/// only points where the sequential pipeline yields control.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// After a search-results navigation.
    pub search_settle: Duration,
    /// After a product-page navigation.
    pub page_load: Duration,
    /// After scrolling to the page midpoint.
    pub scroll: Duration,
    /// After activating the seller-information disclosure.
    pub panel: Duration,
}

impl Pacing {
    /// Zero delays, for tests and local fixtures.
    pub fn none() -> Self {
        Self {
            search_settle: Duration::ZERO,
            page_load: Duration::ZERO,
            scroll: Duration::ZERO,
            panel: Duration::ZERO,
        }
    }
}

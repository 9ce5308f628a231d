use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use sellermail_core::{BrandInput, BrandOutcome};
use sellermail_scraper::{DriverError, PageDriver, Pacing, SiteProfile};

use super::process_brand;

/// Canned page contents keyed by URL; stands in for the live storefront.
#[derive(Debug, Default, Clone)]
struct Page {
    link: Option<String>,
    has_disclosure: bool,
    pairs: Vec<(String, String)>,
    body: String,
}

#[derive(Debug, Default)]
struct ScriptedDriver {
    pages: HashMap<String, Page>,
    current: Option<Page>,
    visited: Vec<String>,
}

impl ScriptedDriver {
    fn with_page(mut self, url: &str, page: Page) -> Self {
        self.pages.insert(url.to_owned(), page);
        self
    }
}

#[async_trait]
impl PageDriver for ScriptedDriver {
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.visited.push(url.to_owned());
        match self.pages.get(url) {
            Some(page) => {
                self.current = Some(page.clone());
                Ok(())
            }
            None => Err(DriverError::UnexpectedStatus {
                status: 404,
                url: url.to_owned(),
            }),
        }
    }

    async fn wait_settled(&mut self, _delay: Duration) -> Result<(), DriverError> {
        Ok(())
    }

    async fn scroll_to_midpoint(&mut self) -> Result<(), DriverError> {
        Ok(())
    }

    fn find_link(&self, _selectors: &[String]) -> Result<Option<String>, DriverError> {
        Ok(self.current.as_ref().and_then(|p| p.link.clone()))
    }

    fn activate(
        &mut self,
        _selectors: &[String],
        _tokens: &[String],
    ) -> Result<bool, DriverError> {
        Ok(self.current.as_ref().is_some_and(|p| p.has_disclosure))
    }

    fn definition_pairs(&self) -> Result<Vec<(String, String)>, DriverError> {
        Ok(self
            .current
            .as_ref()
            .map(|p| p.pairs.clone())
            .unwrap_or_default())
    }

    fn body_text(&self) -> Result<String, DriverError> {
        Ok(self
            .current
            .as_ref()
            .map(|p| p.body.clone())
            .unwrap_or_default())
    }
}

fn test_profile() -> SiteProfile {
    SiteProfile {
        search_url_template: "test://search?keyword={keyword}".to_owned(),
        ..SiteProfile::musinsa()
    }
}

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn empty_search() -> Page {
    Page::default()
}

fn search_linking_to(url: &str) -> Page {
    Page {
        link: Some(url.to_owned()),
        ..Page::default()
    }
}

#[tokio::test]
async fn resolves_via_alternate_name_and_extracts_email() {
    let mut driver = ScriptedDriver::default()
        .with_page("test://search?keyword=acme", empty_search())
        .with_page(
            "test://search?keyword=ACME",
            search_linking_to("test://products/1"),
        )
        .with_page(
            "test://products/1",
            Page {
                has_disclosure: true,
                pairs: pairs(&[("E-mail", "a@acme.kr"), ("상호", "Acme Co")]),
                ..Page::default()
            },
        );

    let mut brand = BrandInput::named("acme");
    brand.alternate_name = Some("ACME".to_owned());

    let outcome = process_brand(&mut driver, &test_profile(), Pacing::none(), &brand, 0, 1).await;

    let BrandOutcome::Success(record) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(record.product_url, "test://products/1");
    assert_eq!(record.seller_info.email.as_deref(), Some("a@acme.kr"));
    assert_eq!(record.seller_info.company.as_deref(), Some("Acme Co"));
    assert_eq!(record.brand.primary_name, "acme");
    // Both search variants were tried, in order.
    assert_eq!(driver.visited[0], "test://search?keyword=acme");
    assert_eq!(driver.visited[1], "test://search?keyword=ACME");
}

#[tokio::test]
async fn missing_email_is_a_failure_even_with_other_fields() {
    let mut driver = ScriptedDriver::default()
        .with_page(
            "test://search?keyword=acme",
            search_linking_to("test://products/1"),
        )
        .with_page(
            "test://products/1",
            Page {
                has_disclosure: true,
                pairs: pairs(&[("상호", "Acme Co"), ("연락처", "02-000-0000")]),
                ..Page::default()
            },
        );

    let brand = BrandInput::named("acme");
    let outcome = process_brand(&mut driver, &test_profile(), Pacing::none(), &brand, 0, 1).await;

    let BrandOutcome::Failure(record) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(record.error_message, "no email found");
}

#[tokio::test]
async fn missing_disclosure_control_is_reported_by_stage() {
    let mut driver = ScriptedDriver::default()
        .with_page(
            "test://search?keyword=acme",
            search_linking_to("test://products/1"),
        )
        .with_page("test://products/1", Page::default());

    let brand = BrandInput::named("acme");
    let outcome = process_brand(&mut driver, &test_profile(), Pacing::none(), &brand, 0, 1).await;

    let BrandOutcome::Failure(record) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(record.error_message, "seller information panel not found");
}

#[tokio::test]
async fn unreachable_search_collapses_to_no_product_found() {
    // No pages scripted at all: every search navigation faults.
    let mut driver = ScriptedDriver::default();

    let brand = BrandInput::named("acme");
    let outcome = process_brand(&mut driver, &test_profile(), Pacing::none(), &brand, 0, 1).await;

    let BrandOutcome::Failure(record) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(record.error_message, "no product found");
    assert!(record.elapsed_ms < 60_000);
}

#[tokio::test]
async fn input_fields_travel_through_to_the_record() {
    let mut driver = ScriptedDriver::default()
        .with_page(
            "test://search?keyword=acme",
            search_linking_to("test://products/1"),
        )
        .with_page(
            "test://products/1",
            Page {
                has_disclosure: true,
                pairs: pairs(&[("이메일", "a@acme.kr")]),
                ..Page::default()
            },
        );

    let mut brand = BrandInput::named("acme");
    brand.identifier = "acme_ACME".to_owned();
    brand.category = "manual".to_owned();
    brand
        .extra
        .insert("rank".to_owned(), serde_json::Value::from(7));

    let outcome =
        process_brand(&mut driver, &test_profile(), Pacing::none(), &brand, 0, 1).await;

    let BrandOutcome::Success(record) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(record.brand.identifier, "acme_ACME");
    assert_eq!(record.brand.category, "manual");
    assert_eq!(record.brand.extra.get("rank"), Some(&serde_json::Value::from(7)));
}

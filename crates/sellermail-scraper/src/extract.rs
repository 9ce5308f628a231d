//! Seller-information extraction from a resolved product page.

use sellermail_core::SellerInfo;

use crate::driver::PageDriver;
use crate::email::select_email;
use crate::error::ScrapeError;
use crate::profile::{Pacing, SiteProfile};

/// Drives a product page to reveal the seller panel and extracts its
/// contact fields.
pub struct SellerInfoExtractor<'a> {
    profile: &'a SiteProfile,
    pacing: Pacing,
}

impl<'a> SellerInfoExtractor<'a> {
    pub fn new(profile: &'a SiteProfile, pacing: Pacing) -> Self {
        Self { profile, pacing }
    }

    /// Runs the full extraction protocol: navigate, settle, scroll for
    /// lazy-loaded content, activate the seller-information disclosure,
    /// settle again, then read the contact fields.
    ///
    /// All returned fields are optional; classification (email present or
    /// not) is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::PanelNotFound`] — no disclosure control matched or
    ///   activation failed.
    /// - [`ScrapeError::Driver`] — navigation or page-query fault.
    pub async fn extract<D: PageDriver>(
        &self,
        driver: &mut D,
        product_url: &str,
    ) -> Result<SellerInfo, ScrapeError> {
        tracing::info!(url = product_url, "opening product page");
        driver.navigate(product_url).await?;
        driver.wait_settled(self.pacing.page_load).await?;

        driver.scroll_to_midpoint().await?;
        driver.wait_settled(self.pacing.scroll).await?;

        if !self.activate_disclosure(driver)? {
            return Err(ScrapeError::PanelNotFound);
        }
        driver.wait_settled(self.pacing.panel).await?;

        let info = self.read_fields(driver)?;
        tracing::info!(
            url = product_url,
            email = info.email.as_deref().unwrap_or("-"),
            company = info.company.as_deref().unwrap_or("-"),
            "extraction complete"
        );
        Ok(info)
    }

    /// Ordered disclosure strategy: scan the page's interactive elements for
    /// the configured label synonyms first, then fall back to the structural
    /// accordion-trigger selectors with the looser seller tokens.
    fn activate_disclosure<D: PageDriver>(&self, driver: &mut D) -> Result<bool, ScrapeError> {
        let interactive = std::slice::from_ref(&self.profile.disclosure_selector);
        if driver.activate(interactive, &self.profile.disclosure_tokens)? {
            return Ok(true);
        }
        Ok(driver.activate(
            &self.profile.disclosure_fallback_selectors,
            &self.profile.disclosure_fallback_tokens,
        )?)
    }

    fn read_fields<D: PageDriver>(&self, driver: &mut D) -> Result<SellerInfo, ScrapeError> {
        let pairs = driver.definition_pairs()?;

        let email = lookup(&pairs, &self.profile.email_labels)
            .or_else(|| self.email_from_page_text(driver));

        Ok(SellerInfo {
            email,
            brand: lookup(&pairs, &self.profile.brand_labels),
            company: lookup(&pairs, &self.profile.company_labels),
            phone: lookup(&pairs, &self.profile.phone_labels),
            business_number: lookup(&pairs, &self.profile.business_number_labels),
            address: lookup(&pairs, &self.profile.address_labels),
        })
    }

    /// Regex salvage over the full page text when no structured email pair
    /// exists. Query faults here degrade to "no email" rather than failing
    /// the extraction outright.
    fn email_from_page_text<D: PageDriver>(&self, driver: &mut D) -> Option<String> {
        match driver.body_text() {
            Ok(text) => select_email(&text, &self.profile.email_denylist),
            Err(e) => {
                tracing::warn!(error = %e, "page text scan failed");
                None
            }
        }
    }
}

/// Label-driven lookup: for each synonym in order, the first pair whose
/// label contains it yields the trimmed value. Empty values don't count.
fn lookup(pairs: &[(String, String)], labels: &[String]) -> Option<String> {
    for label in labels {
        for (term, value) in pairs {
            if term.contains(label.as_str()) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_owned());
                }
            }
        }
    }
    None
}

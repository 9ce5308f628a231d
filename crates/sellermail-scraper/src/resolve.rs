//! Brand-to-product-page resolution via storefront search.

use std::time::Duration;

use crate::driver::PageDriver;
use crate::error::ScrapeError;
use crate::profile::SiteProfile;

/// Resolves a brand name to a representative product-page URL.
pub struct BrandResolver<'a> {
    profile: &'a SiteProfile,
    settle: Duration,
}

impl<'a> BrandResolver<'a> {
    pub fn new(profile: &'a SiteProfile, settle: Duration) -> Self {
        Self { profile, settle }
    }

    /// Tries each name variant in order: search the storefront, wait for the
    /// results to settle, then walk the product-link selector chain and take
    /// the first match. Returns the first URL any variant yields.
    ///
    /// Driver faults during one variant's search are logged and the next
    /// variant is tried; the search page not loading for one spelling is no
    /// reason to skip the other.
    ///
    /// # Errors
    ///
    /// [`ScrapeError::NoProductFound`] when every variant and selector is
    /// exhausted.
    pub async fn resolve<D: PageDriver>(
        &self,
        driver: &mut D,
        variants: &[&str],
    ) -> Result<String, ScrapeError> {
        for variant in variants {
            let search_url = self.profile.search_url(variant);
            tracing::info!(variant, "searching storefront");

            if let Err(e) = driver.navigate(&search_url).await {
                tracing::warn!(variant, error = %e, "search navigation failed");
                continue;
            }
            driver.wait_settled(self.settle).await?;

            match driver.find_link(&self.profile.product_link_selectors) {
                Ok(Some(url)) => {
                    tracing::info!(variant, url = %url, "product page found");
                    return Ok(url);
                }
                Ok(None) => {
                    tracing::debug!(variant, "no product link in search results");
                }
                Err(e) => {
                    tracing::warn!(variant, error = %e, "search result query failed");
                }
            }
        }
        Err(ScrapeError::NoProductFound)
    }
}

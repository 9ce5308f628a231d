//! Per-brand enrichment pipeline: resolve, extract, classify.
//!
//! Every brand terminates here with exactly one outcome. Pipeline errors are
//! folded into `FailureRecord`s rather than propagated, so one bad brand can
//! never abort a batch run.

use std::time::Instant;

use chrono::Utc;

use sellermail_core::{BrandInput, BrandOutcome, FailureRecord, SellerInfo, SuccessRecord};
use sellermail_scraper::{
    BrandResolver, PageDriver, Pacing, ScrapeError, SellerInfoExtractor, SiteProfile,
};

/// Run the full pipeline for one brand and classify the result.
///
/// Success requires a non-empty seller email; resolving a product page and
/// even extracting other contact fields without one is recorded as a failure
/// with the stage-identifying message.
pub(super) async fn process_brand<D: PageDriver>(
    driver: &mut D,
    profile: &SiteProfile,
    pacing: Pacing,
    brand: &BrandInput,
    index: usize,
    total: usize,
) -> BrandOutcome {
    tracing::info!(
        brand = %brand.primary_name,
        position = index + 1,
        total,
        "processing brand"
    );
    let started = Instant::now();

    let result = enrich(driver, profile, pacing, brand).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok((product_url, seller_info)) => {
            tracing::info!(
                brand = %brand.primary_name,
                email = seller_info.email.as_deref().unwrap_or_default(),
                elapsed_ms,
                "brand enriched"
            );
            BrandOutcome::Success(SuccessRecord {
                brand: brand.clone(),
                product_url,
                seller_info,
                collected_at: Utc::now(),
                elapsed_ms,
            })
        }
        Err(e) => {
            tracing::warn!(
                brand = %brand.primary_name,
                error = %e,
                elapsed_ms,
                "brand failed"
            );
            BrandOutcome::Failure(FailureRecord {
                brand: brand.clone(),
                error_message: e.to_string(),
                collected_at: Utc::now(),
                elapsed_ms,
            })
        }
    }
}

/// Resolve the brand to a product page, extract seller info, and require an
/// email.
async fn enrich<D: PageDriver>(
    driver: &mut D,
    profile: &SiteProfile,
    pacing: Pacing,
    brand: &BrandInput,
) -> Result<(String, SellerInfo), ScrapeError> {
    let resolver = BrandResolver::new(profile, pacing.search_settle);
    let product_url = resolver.resolve(driver, &brand.name_variants()).await?;

    let extractor = SellerInfoExtractor::new(profile, pacing);
    let seller_info = extractor.extract(driver, &product_url).await?;

    if seller_info.has_email() {
        Ok((product_url, seller_info))
    } else {
        Err(ScrapeError::NoEmailFound)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "processor_test.rs"]
mod tests;

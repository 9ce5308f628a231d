//! Collection command handlers for the CLI.
//!
//! These are called from `main` after configuration is established.
//! Per-brand failures are recorded and skipped rather than propagated so a
//! single bad brand does not abort a batch run; only persistence failures
//! are fatal.

mod orchestrator;
mod processor;

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use sellermail_core::{AppConfig, BrandInput, BrandOutcome};
use sellermail_scraper::{HttpPageDriver, Pacing, SiteProfile};

use crate::store::{load_batch_input, JsonResultStore};

/// Everything the per-brand closure needs: one owned page context plus the
/// site heuristics driving it. The driver holds no per-brand state beyond
/// the current page, so one instance serves the whole run.
struct Pipeline {
    driver: HttpPageDriver,
    profile: SiteProfile,
    pacing: Pacing,
}

impl Pipeline {
    fn from_config(config: &AppConfig, profile: SiteProfile) -> anyhow::Result<Self> {
        let driver = HttpPageDriver::new(
            config.request_timeout_secs,
            &config.user_agent,
            &config.accept_language,
        )?;
        let pacing = Pacing {
            search_settle: Duration::from_millis(config.search_settle_ms),
            page_load: Duration::from_millis(config.page_load_delay_ms),
            scroll: Duration::from_millis(config.scroll_delay_ms),
            panel: Duration::from_millis(config.panel_delay_ms),
        };
        Ok(Self {
            driver,
            profile,
            pacing,
        })
    }
}

fn process_one<'a>(
    pipeline: &'a mut Pipeline,
    brand: &'a BrandInput,
    index: usize,
    total: usize,
) -> Pin<Box<dyn Future<Output = BrandOutcome> + 'a>> {
    Box::pin(processor::process_brand(
        &mut pipeline.driver,
        &pipeline.profile,
        pipeline.pacing,
        brand,
        index,
        total,
    ))
}

/// Process every brand in `input` sequentially against the default
/// storefront, checkpointing along the way and writing the final result
/// files at the end.
///
/// # Errors
///
/// Returns an error if the input file cannot be loaded, the page driver
/// cannot be constructed, or a checkpoint/result file cannot be written.
pub(crate) async fn run_batch_command(config: &AppConfig, input: &Path) -> anyhow::Result<()> {
    run_batch_with_profile(config, input, SiteProfile::musinsa()).await
}

pub(crate) async fn run_batch_with_profile(
    config: &AppConfig,
    input: &Path,
    profile: SiteProfile,
) -> anyhow::Result<()> {
    let brands = load_batch_input(input)?;
    if brands.is_empty() {
        println!("no brands to process; nothing to do");
        return Ok(());
    }
    tracing::info!(brands = brands.len(), input = %input.display(), "starting batch run");

    let mut pipeline = Pipeline::from_config(config, profile)?;
    let store = JsonResultStore::new(&config.output_dir);
    let pacing = orchestrator::BatchPacing::from_config(config);

    let acc = orchestrator::run_batch(&mut pipeline, &store, &pacing, &brands, process_one).await?;
    store.write_final(&acc)?;

    println!(
        "processed {} brands: {} succeeded, {} failed ({})",
        acc.processed_count(),
        acc.success_count(),
        acc.failed_count(),
        acc.success_rate()
    );
    Ok(())
}

/// Enrich one brand given on the command line and persist the result the
/// same way a batch run would.
///
/// A brand that yields no email is still a normal exit: the failure is
/// recorded in the result files, not surfaced as a process error.
pub(crate) async fn run_single_command(
    config: &AppConfig,
    primary_name: &str,
    alternate_name: Option<&str>,
) -> anyhow::Result<()> {
    run_single_with_profile(config, primary_name, alternate_name, SiteProfile::musinsa()).await
}

pub(crate) async fn run_single_with_profile(
    config: &AppConfig,
    primary_name: &str,
    alternate_name: Option<&str>,
    profile: SiteProfile,
) -> anyhow::Result<()> {
    let brand = BrandInput {
        primary_name: primary_name.to_owned(),
        alternate_name: alternate_name.map(str::to_owned),
        identifier: format!("{primary_name}_{}", alternate_name.unwrap_or_default()),
        category: "manual".to_owned(),
        extra: serde_json::Map::new(),
    };

    let mut pipeline = Pipeline::from_config(config, profile)?;
    let store = JsonResultStore::new(&config.output_dir);
    let pacing = orchestrator::BatchPacing::from_config(config);

    let acc = orchestrator::run_batch(
        &mut pipeline,
        &store,
        &pacing,
        std::slice::from_ref(&brand),
        process_one,
    )
    .await?;
    store.write_final(&acc)?;

    match acc.results().first() {
        Some(record) => println!(
            "{}: {} ({})",
            record.brand.primary_name,
            record.seller_info.email.as_deref().unwrap_or_default(),
            record.product_url
        ),
        None => {
            let message = acc
                .failed()
                .first()
                .map_or("no outcome recorded", |r| r.error_message.as_str());
            println!("{primary_name}: failed ({message})");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;

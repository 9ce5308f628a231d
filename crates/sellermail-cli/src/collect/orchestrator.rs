//! Sequential batch orchestration: pacing, checkpoints, and rest pauses.
//!
//! Brands are processed strictly one at a time. The per-brand work is
//! injected as a boxed-future closure over a caller-owned context so the
//! loop's pacing and checkpoint behavior can be exercised without any
//! network layer behind it.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use sellermail_core::{AppConfig, BrandInput, BrandOutcome, RunAccumulator};

use crate::store::JsonResultStore;

/// Batch-level pacing knobs, distinct from the per-page settle delays.
pub(super) struct BatchPacing {
    /// Pause between consecutive brands.
    pub inter_item_delay: Duration,
    /// Number of processed brands between checkpoint snapshots.
    pub checkpoint_batch_size: usize,
    /// Longer rest taken after each checkpoint is written.
    pub rest_duration: Duration,
}

impl BatchPacing {
    pub(super) fn from_config(config: &AppConfig) -> Self {
        Self {
            inter_item_delay: Duration::from_millis(config.inter_item_delay_ms),
            checkpoint_batch_size: config.checkpoint_batch_size,
            rest_duration: Duration::from_millis(config.rest_duration_ms),
        }
    }
}

/// Run the batch loop over `brands`, recording one outcome per brand.
///
/// After every brand except the last, the loop sleeps for the inter-item
/// delay; when a checkpoint boundary is reached (and more brands remain), a
/// snapshot is persisted and the longer rest is taken. A checkpoint write
/// failure aborts the run: if results cannot be persisted mid-run they will
/// not be persistable at the end either.
///
/// `process` must never panic and never abort the loop; per-brand failures
/// are returned as `BrandOutcome::Failure` values.
pub(super) async fn run_batch<C, F>(
    context: &mut C,
    store: &JsonResultStore,
    pacing: &BatchPacing,
    brands: &[BrandInput],
    mut process: F,
) -> anyhow::Result<RunAccumulator>
where
    F: for<'a> FnMut(
        &'a mut C,
        &'a BrandInput,
        usize,
        usize,
    ) -> Pin<Box<dyn Future<Output = BrandOutcome> + 'a>>,
{
    let total = brands.len();
    let checkpoint_every = pacing.checkpoint_batch_size.max(1);
    let mut acc = RunAccumulator::new();

    for (index, brand) in brands.iter().enumerate() {
        let outcome = process(context, brand, index, total).await;
        acc.record(outcome);

        let is_last = index + 1 == total;
        if is_last {
            break;
        }

        tokio::time::sleep(pacing.inter_item_delay).await;

        if (index + 1) % checkpoint_every == 0 {
            let path = store.write_checkpoint(&acc.snapshot())?;
            tracing::info!(
                path = %path.display(),
                processed = acc.processed_count(),
                succeeded = acc.success_count(),
                failed = acc.failed_count(),
                "checkpoint written, resting"
            );
            tokio::time::sleep(pacing.rest_duration).await;
        }
    }

    tracing::info!(
        processed = acc.processed_count(),
        succeeded = acc.success_count(),
        failed = acc.failed_count(),
        success_rate = %acc.success_rate(),
        "batch run complete"
    );
    Ok(acc)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

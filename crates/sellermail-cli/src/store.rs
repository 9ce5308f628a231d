//! JSON file persistence for run results.
//!
//! All files land in the configured output directory with a millisecond
//! timestamp in the name, so successive runs never clobber each other.
//! Checkpoint files are written mid-run and final result files once at the
//! end; the summary file is always written, the success/failed files only
//! when they have content.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use sellermail_core::{BrandInput, RunAccumulator, Snapshot};

pub(crate) struct JsonResultStore {
    output_dir: PathBuf,
}

impl JsonResultStore {
    pub(crate) fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Persist a mid-run checkpoint snapshot, creating the output directory
    /// on first use. The processed count in the name keeps successive
    /// checkpoints of one run distinct even within a millisecond. Returns the
    /// path written.
    pub(crate) fn write_checkpoint(&self, snapshot: &Snapshot) -> anyhow::Result<PathBuf> {
        let path = self.output_dir.join(format!(
            "checkpoint_{}_{}.json",
            snapshot.processed_count,
            timestamp_millis()
        ));
        self.write_json(&path, snapshot)?;
        Ok(path)
    }

    /// Persist the final result files for a completed run: `success_*` and
    /// `failed_*` when non-empty, plus the `summary_*` projection. All three
    /// share one timestamp. Returns the paths written.
    pub(crate) fn write_final(&self, acc: &RunAccumulator) -> anyhow::Result<Vec<PathBuf>> {
        let stamp = timestamp_millis();
        let mut written = Vec::new();

        if !acc.results().is_empty() {
            let path = self.output_dir.join(format!("success_{stamp}.json"));
            self.write_json(&path, acc.results())?;
            written.push(path);
        }
        if !acc.failed().is_empty() {
            let path = self.output_dir.join(format!("failed_{stamp}.json"));
            self.write_json(&path, acc.failed())?;
            written.push(path);
        }

        let path = self.output_dir.join(format!("summary_{stamp}.json"));
        self.write_json(&path, &acc.summary())?;
        written.push(path);

        for path in &written {
            tracing::info!(path = %path.display(), "wrote result file");
        }
        Ok(written)
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;
        let json = serde_json::to_string_pretty(value).context("failed to serialize results")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

fn timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Input file shapes accepted by batch mode: either a bare array of brands,
/// or a previous run's result object whose `failedResults` and
/// `skippedResults` entries are re-queued (in that order).
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchInput {
    Brands(Vec<BrandInput>),
    PreviousRun {
        #[serde(default, rename = "failedResults")]
        failed_results: Vec<BrandInput>,
        #[serde(default, rename = "skippedResults")]
        skipped_results: Vec<BrandInput>,
    },
}

/// Load the brands to process from a batch input file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as either
/// accepted shape. An unreadable input is fatal; there is nothing to retry.
pub(crate) fn load_batch_input(path: &Path) -> anyhow::Result<Vec<BrandInput>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    let input: BatchInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse input file {}", path.display()))?;
    Ok(match input {
        BatchInput::Brands(brands) => brands,
        BatchInput::PreviousRun {
            mut failed_results,
            skipped_results,
        } => {
            failed_results.extend(skipped_results);
            failed_results
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

//! Run-level accumulation: the append-only result sets for one batch run and
//! the snapshot/summary views derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::brand::{BrandOutcome, FailureRecord, SuccessRecord};

/// Ordered result sets for one orchestration run.
///
/// Both sequences are append-only for the lifetime of the run; insertion
/// order equals processing order, which equals input order. The accumulator
/// is an explicit value owned by the orchestrator, not hidden process state,
/// so runs are restartable and testable with injected fixtures.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    results: Vec<SuccessRecord>,
    failed: Vec<FailureRecord>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one terminal outcome. Called exactly once per input brand.
    pub fn record(&mut self, outcome: BrandOutcome) {
        match outcome {
            BrandOutcome::Success(r) => self.results.push(r),
            BrandOutcome::Failure(r) => self.failed.push(r),
        }
    }

    pub fn results(&self) -> &[SuccessRecord] {
        &self.results
    }

    pub fn failed(&self) -> &[FailureRecord] {
        &self.failed
    }

    pub fn success_count(&self) -> usize {
        self.results.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn processed_count(&self) -> usize {
        self.results.len() + self.failed.len()
    }

    /// Success rate as a one-decimal percent string, `"0%"` before anything
    /// has been processed.
    pub fn success_rate(&self) -> String {
        let processed = self.processed_count();
        if processed == 0 {
            return "0%".to_owned();
        }
        #[allow(clippy::cast_precision_loss)]
        let rate = self.results.len() as f64 / processed as f64 * 100.0;
        format!("{rate:.1}%")
    }

    /// Point-in-time view for checkpoint persistence. The snapshot owns its
    /// own copies and never mutates the accumulator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            timestamp: Utc::now(),
            processed_count: self.processed_count(),
            success_count: self.success_count(),
            failed_count: self.failed_count(),
            results: self.results.clone(),
            failed: self.failed.clone(),
        }
    }

    /// Final run summary, including the `emails` projection of successful
    /// records.
    pub fn summary(&self) -> RunSummary {
        let emails = self
            .results
            .iter()
            .map(|r| EmailEntry {
                primary_name: r.brand.primary_name.clone(),
                email: r.seller_info.email.clone().unwrap_or_default(),
                company: r.seller_info.company.clone(),
            })
            .collect();

        RunSummary {
            processed_at: Utc::now(),
            total_processed: self.processed_count(),
            success_count: self.success_count(),
            failed_count: self.failed_count(),
            success_rate: self.success_rate(),
            results: self.results.clone(),
            failed: self.failed.clone(),
            emails,
        }
    }
}

/// Durable point-in-time view of a [`RunAccumulator`], written at checkpoint
/// boundaries. Never mutated after being written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub processed_count: usize,
    pub success_count: usize,
    pub failed_count: usize,
    pub results: Vec<SuccessRecord>,
    pub failed: Vec<FailureRecord>,
}

/// Final summary written once at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub processed_at: DateTime<Utc>,
    pub total_processed: usize,
    pub success_count: usize,
    pub failed_count: usize,
    pub success_rate: String,
    pub results: Vec<SuccessRecord>,
    pub failed: Vec<FailureRecord>,
    pub emails: Vec<EmailEntry>,
}

/// One row of the summary's contact-list projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntry {
    pub primary_name: String,
    pub email: String,
    pub company: Option<String>,
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;

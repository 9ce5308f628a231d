//! Per-brand input and outcome records.
//!
//! Wire field names are camelCase to stay compatible with the JSON result
//! files produced by earlier collection runs, which are also the batch-mode
//! input format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One brand to enrich, as read from the input set.
///
/// Only `primary_name` is meaningful to the pipeline; `identifier` and
/// `category` travel through unvalidated. Any other fields present on the
/// input object are captured in `extra` and written back out unchanged, so
/// every output record is a superset of its input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInput {
    pub primary_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub category: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BrandInput {
    /// Brand with just a primary name; the other scalar fields stay empty.
    pub fn named(primary_name: impl Into<String>) -> Self {
        Self {
            primary_name: primary_name.into(),
            alternate_name: None,
            identifier: String::new(),
            category: String::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Name variants in resolution order: primary first, then the alternate
    /// name when present and non-empty.
    pub fn name_variants(&self) -> Vec<&str> {
        let mut variants = vec![self.primary_name.as_str()];
        if let Some(alt) = self.alternate_name.as_deref() {
            if !alt.is_empty() {
                variants.push(alt);
            }
        }
        variants
    }
}

/// Seller contact fields extracted from a product page.
///
/// Every field is optional; `email` alone decides whether the brand counts
/// as a success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    pub email: Option<String>,
    pub brand: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub business_number: Option<String>,
    pub address: Option<String>,
}

impl SellerInfo {
    /// `true` when a non-empty email was captured.
    pub fn has_email(&self) -> bool {
        self.email
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }
}

/// A brand that yielded a usable seller email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRecord {
    #[serde(flatten)]
    pub brand: BrandInput,
    pub product_url: String,
    pub seller_info: SellerInfo,
    pub collected_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// A brand that terminated without a usable email, with the stage-identifying
/// error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    #[serde(flatten)]
    pub brand: BrandInput,
    pub error_message: String,
    pub collected_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// Terminal outcome for one brand. Exactly one of these is produced per
/// input brand; it is `Success` iff a non-empty seller email was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum BrandOutcome {
    Success(SuccessRecord),
    Failure(FailureRecord),
}

impl BrandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BrandOutcome::Success(_))
    }

    /// Wall-clock processing time recorded on the underlying record.
    pub fn elapsed_ms(&self) -> u64 {
        match self {
            BrandOutcome::Success(r) => r.elapsed_ms,
            BrandOutcome::Failure(r) => r.elapsed_ms,
        }
    }
}

#[cfg(test)]
#[path = "brand_test.rs"]
mod tests;

use std::path::PathBuf;

/// Runtime configuration for a collection run.
///
/// Every field has a default and can be overridden via `SELLERMAIL_*`
/// environment variables (see `config.rs`); the pacing knobs can additionally
/// be overridden per run from the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pause between consecutive brands, throttling request rate.
    pub inter_item_delay_ms: u64,
    /// Number of processed brands between checkpoint snapshots.
    pub checkpoint_batch_size: usize,
    /// Longer rest after each checkpoint, reducing rate-limit risk.
    pub rest_duration_ms: u64,
    /// Settle pause after a search-results navigation.
    pub search_settle_ms: u64,
    /// Settle pause after a product-page navigation.
    pub page_load_delay_ms: u64,
    /// Pause after scrolling to the page midpoint (lazy-loaded content).
    pub scroll_delay_ms: u64,
    /// Pause after activating the seller-information disclosure.
    pub panel_delay_ms: u64,
    /// Per-request HTTP timeout.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
    /// Directory where checkpoint and result files are written.
    pub output_dir: PathBuf,
}

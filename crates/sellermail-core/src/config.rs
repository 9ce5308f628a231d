use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

/// Default user agent: a desktop browser profile. The target storefront
/// serves a reduced page to obvious bot user agents.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en;q=0.8";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse. Every setting has
/// a default, so an empty environment always succeeds.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let inter_item_delay_ms = parse_u64("SELLERMAIL_INTER_ITEM_DELAY_MS", "4000")?;
    let checkpoint_batch_size = parse_usize("SELLERMAIL_CHECKPOINT_BATCH_SIZE", "15")?;
    let rest_duration_ms = parse_u64("SELLERMAIL_REST_DURATION_MS", "60000")?;
    let search_settle_ms = parse_u64("SELLERMAIL_SEARCH_SETTLE_MS", "3000")?;
    let page_load_delay_ms = parse_u64("SELLERMAIL_PAGE_LOAD_DELAY_MS", "5000")?;
    let scroll_delay_ms = parse_u64("SELLERMAIL_SCROLL_DELAY_MS", "2000")?;
    let panel_delay_ms = parse_u64("SELLERMAIL_PANEL_DELAY_MS", "5000")?;
    let request_timeout_secs = parse_u64("SELLERMAIL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SELLERMAIL_USER_AGENT", DEFAULT_USER_AGENT);
    let accept_language = or_default("SELLERMAIL_ACCEPT_LANGUAGE", DEFAULT_ACCEPT_LANGUAGE);
    let output_dir = PathBuf::from(or_default("SELLERMAIL_OUTPUT_DIR", "./output"));

    Ok(AppConfig {
        inter_item_delay_ms,
        checkpoint_batch_size,
        rest_duration_ms,
        search_settle_ms,
        page_load_delay_ms,
        scroll_delay_ms,
        panel_delay_ms,
        request_timeout_secs,
        user_agent,
        accept_language,
        output_dir,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

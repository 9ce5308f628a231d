use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");

    assert_eq!(cfg.inter_item_delay_ms, 4000);
    assert_eq!(cfg.checkpoint_batch_size, 15);
    assert_eq!(cfg.rest_duration_ms, 60_000);
    assert_eq!(cfg.search_settle_ms, 3000);
    assert_eq!(cfg.page_load_delay_ms, 5000);
    assert_eq!(cfg.scroll_delay_ms, 2000);
    assert_eq!(cfg.panel_delay_ms, 5000);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(cfg.accept_language, "ko-KR,ko;q=0.9,en;q=0.8");
    assert_eq!(cfg.output_dir, std::path::PathBuf::from("./output"));
}

#[test]
fn build_app_config_inter_item_delay_override() {
    let mut map = HashMap::new();
    map.insert("SELLERMAIL_INTER_ITEM_DELAY_MS", "250");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.inter_item_delay_ms, 250);
}

#[test]
fn build_app_config_checkpoint_batch_size_override() {
    let mut map = HashMap::new();
    map.insert("SELLERMAIL_CHECKPOINT_BATCH_SIZE", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.checkpoint_batch_size, 3);
}

#[test]
fn build_app_config_rejects_non_numeric_delay() {
    let mut map = HashMap::new();
    map.insert("SELLERMAIL_INTER_ITEM_DELAY_MS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SELLERMAIL_INTER_ITEM_DELAY_MS"
        ),
        "expected InvalidEnvVar(SELLERMAIL_INTER_ITEM_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_batch_size() {
    let mut map = HashMap::new();
    map.insert("SELLERMAIL_CHECKPOINT_BATCH_SIZE", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. })
                if var == "SELLERMAIL_CHECKPOINT_BATCH_SIZE"
        ),
        "expected InvalidEnvVar(SELLERMAIL_CHECKPOINT_BATCH_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SELLERMAIL_USER_AGENT", "sellermail-test/0.1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "sellermail-test/0.1");
}

#[test]
fn build_app_config_output_dir_override() {
    let mut map = HashMap::new();
    map.insert("SELLERMAIL_OUTPUT_DIR", "/tmp/sellermail-out");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.output_dir,
        std::path::PathBuf::from("/tmp/sellermail-out")
    );
}

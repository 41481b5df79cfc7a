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

/// Returns a map with the service key populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("YPAY_API_KEY", "test-service-key");
    m
}

#[test]
fn build_app_config_allows_missing_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert!(cfg.api_key.is_none());
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("YPAY_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert!(cfg.api_key.is_none());
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.api_key.as_deref(), Some("test-service-key"));
    assert_eq!(cfg.base_url, "https://apis.data.go.kr/4050000/ypay/getYpay");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.page_size, 1000);
    assert_eq!(cfg.max_pages, 500);
    assert_eq!(cfg.user_agent, "ypay/0.1 (merchant-lookup)");
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.regions_path.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("YPAY_BASE_URL", "http://localhost:8080/getYpay");
    map.insert("YPAY_REQUEST_TIMEOUT_SECS", "3");
    map.insert("YPAY_PAGE_SIZE", "250");
    map.insert("YPAY_MAX_PAGES", "20");
    map.insert("YPAY_REGIONS_PATH", "./config/regions.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.base_url, "http://localhost:8080/getYpay");
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(cfg.page_size, 250);
    assert_eq!(cfg.max_pages, 20);
    assert_eq!(
        cfg.regions_path.as_deref(),
        Some(std::path::Path::new("./config/regions.yaml"))
    );
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("YPAY_REQUEST_TIMEOUT_SECS", "ten");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YPAY_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(YPAY_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map = full_env();
    map.insert("YPAY_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YPAY_PAGE_SIZE"),
        "expected InvalidEnvVar(YPAY_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_max_pages() {
    let mut map = full_env();
    map.insert("YPAY_MAX_PAGES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YPAY_MAX_PAGES"),
        "expected InvalidEnvVar(YPAY_MAX_PAGES), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-service-key"), "{rendered}");
    assert!(rendered.contains("[redacted]"));
}

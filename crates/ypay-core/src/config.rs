use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap`.
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

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let api_key = lookup("YPAY_API_KEY")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let base_url = or_default("YPAY_BASE_URL", DEFAULT_BASE_URL);
    let request_timeout_secs = parse_u64("YPAY_REQUEST_TIMEOUT_SECS", "10")?;
    let page_size = parse_positive_u32("YPAY_PAGE_SIZE", "1000")?;
    let max_pages = parse_positive_u32("YPAY_MAX_PAGES", "500")?;
    let user_agent = or_default("YPAY_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("YPAY_LOG_LEVEL", "warn");
    let regions_path = lookup("YPAY_REGIONS_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        api_key,
        base_url,
        request_timeout_secs,
        page_size,
        max_pages,
        user_agent,
        log_level,
        regions_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
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

    let feed_url = require("NAVCAT_FEED_URL")?;
    let feed_timeout_secs = parse_u64("NAVCAT_FEED_TIMEOUT_SECS", "30")?;
    let page_timeout_secs = parse_u64("NAVCAT_PAGE_TIMEOUT_SECS", "15")?;
    let user_agent = or_default(
        "NAVCAT_USER_AGENT",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    );
    let max_retries = parse_u32("NAVCAT_MAX_RETRIES", "3")?;
    let retry_delay_secs = parse_u64("NAVCAT_RETRY_DELAY_SECS", "3")?;
    let inter_request_delay_ms = parse_u64("NAVCAT_INTER_REQUEST_DELAY_MS", "1000")?;
    let min_sentence_len = parse_usize("NAVCAT_MIN_SENTENCE_LEN", "15")?;
    let min_point_len = parse_usize("NAVCAT_MIN_POINT_LEN", "10")?;
    let max_line_key_len = parse_usize("NAVCAT_MAX_LINE_KEY_LEN", "50")?;

    Ok(AppConfig {
        feed_url,
        feed_timeout_secs,
        page_timeout_secs,
        user_agent,
        max_retries,
        retry_delay_secs,
        inter_request_delay_ms,
        min_sentence_len,
        min_point_len,
        max_line_key_len,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

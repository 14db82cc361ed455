use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_OFF_BASE_URL: &str = "https://world.openfoodfacts.org";
const DEFAULT_UPCITEMDB_BASE_URL: &str = "https://api.upcitemdb.com";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
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
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
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

    let log_level = or_default("FOODSCAN_LOG_LEVEL", "info");

    let off_base_url = or_default("FOODSCAN_OFF_BASE_URL", DEFAULT_OFF_BASE_URL);
    let upcitemdb_base_url =
        or_default("FOODSCAN_UPCITEMDB_BASE_URL", DEFAULT_UPCITEMDB_BASE_URL);
    for (var, value) in [
        ("FOODSCAN_OFF_BASE_URL", &off_base_url),
        ("FOODSCAN_UPCITEMDB_BASE_URL", &upcitemdb_base_url),
    ] {
        if !(value.starts_with("http://") || value.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got '{value}'"),
            });
        }
    }

    let request_timeout_secs = parse_u64("FOODSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOODSCAN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let user_agent = lookup("FOODSCAN_USER_AGENT")
        .ok()
        .filter(|ua| !ua.trim().is_empty());

    let max_concurrent = parse_usize("FOODSCAN_MAX_CONCURRENT", "4")?;
    if max_concurrent == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOODSCAN_MAX_CONCURRENT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        off_base_url,
        upcitemdb_base_url,
        request_timeout_secs,
        user_agent,
        max_concurrent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

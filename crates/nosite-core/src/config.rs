use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
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
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a pure
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("NOSITE_ENV", "development"))?;
    let bind_addr = parse_addr("NOSITE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NOSITE_LOG_LEVEL", "info");

    let places_api_key = lookup("GOOGLE_PLACES_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    if places_api_key.is_none() && env == Environment::Production {
        return Err(ConfigError::MissingEnvVar(
            "GOOGLE_PLACES_API_KEY".to_string(),
        ));
    }
    let places_base_url = or_default(
        "NOSITE_PLACES_BASE_URL",
        "https://maps.googleapis.com/maps/api/",
    );

    let request_timeout_secs = parse_u64("NOSITE_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("NOSITE_USER_AGENT", "nosite/0.1 (local-business-discovery)");
    let max_retries = parse_u32("NOSITE_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("NOSITE_RETRY_BACKOFF_BASE_MS", "500")?;
    let inter_request_delay_ms = parse_u64("NOSITE_INTER_REQUEST_DELAY_MS", "0")?;

    let max_concurrent_categories = parse_usize("NOSITE_MAX_CONCURRENT_CATEGORIES", "1")?;
    if max_concurrent_categories == 0 {
        return Err(invalid(
            "NOSITE_MAX_CONCURRENT_CATEGORIES",
            "must be at least 1".to_string(),
        ));
    }

    let state_path = PathBuf::from(or_default("NOSITE_STATE_PATH", "./.nosite/last_search.json"));

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        places_api_key,
        places_base_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        inter_request_delay_ms,
        max_concurrent_categories,
        state_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NOSITE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

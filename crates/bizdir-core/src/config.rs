use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_PAGE_SIZE: usize = 12;

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
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::num::NonZeroUsize;
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BIZDIR_ENV", "development"))?;
    let bind_addr = parse_addr("BIZDIR_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BIZDIR_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("BIZDIR_CATALOG_PATH", "./config/catalog.yaml"));

    let page_size = NonZeroUsize::new(parse_usize(
        "BIZDIR_PAGE_SIZE",
        &DEFAULT_PAGE_SIZE.to_string(),
    )?)
    .ok_or_else(|| invalid("BIZDIR_PAGE_SIZE", "page size must be positive".to_string()))?;

    let rate_limit_per_minute = parse_usize("BIZDIR_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        page_size,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BIZDIR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::AppConfig;
use crate::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

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

/// Build application configuration using the provided env-var lookup function,
/// so tests can pass a plain `HashMap` instead of touching the process env.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let data_base_url = parse_base_url(&or_default(
        "FFFINDER_DATA_BASE_URL",
        "http://localhost:5173",
    ))?;
    let log_level = parse_log_level(&or_default("FFFINDER_LOG_LEVEL", "info"))?;
    let user_agent = or_default("FFFINDER_USER_AGENT", "fffinder/0.1 (permit-directory)");

    Ok(AppConfig {
        data_base_url,
        log_level,
        user_agent,
    })
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "FFFINDER_DATA_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{raw}\""),
        })
    }
}

fn parse_log_level(raw: &str) -> Result<String, ConfigError> {
    let level = raw.trim().to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "FFFINDER_LOG_LEVEL".to_string(),
            reason: format!("expected one of {}, got \"{raw}\"", LOG_LEVELS.join("/")),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

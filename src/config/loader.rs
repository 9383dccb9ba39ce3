//! Load router config from environment variables or a JSON file.

use crate::config::types::{RouterConfig, DEFAULT_BODY_LIMIT};
use crate::error::ConfigError;
use std::path::Path;

pub const CASE_SENSITIVE_ENV: &str = "RESOURCES_CASE_SENSITIVE";
pub const STRICT_ROUTING_ENV: &str = "RESOURCES_STRICT_ROUTING";
pub const BODY_LIMIT_ENV: &str = "RESOURCES_BODY_LIMIT";

/// Build config from `RESOURCES_*` env vars; unset vars keep their defaults.
pub fn load_from_env() -> Result<RouterConfig, ConfigError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`load_from_env`] over an arbitrary key lookup.
pub fn load_from_lookup<F>(lookup: F) -> Result<RouterConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let case_sensitive = match lookup(CASE_SENSITIVE_ENV) {
        Some(v) => parse_flag(CASE_SENSITIVE_ENV, &v)?,
        None => false,
    };
    let strict = match lookup(STRICT_ROUTING_ENV) {
        Some(v) => parse_flag(STRICT_ROUTING_ENV, &v)?,
        None => false,
    };
    let body_limit = match lookup(BODY_LIMIT_ENV) {
        Some(v) => v.trim().parse::<usize>().map_err(|_| {
            ConfigError::Validation(format!("{} must be a byte count, got '{}'", BODY_LIMIT_ENV, v))
        })?,
        None => DEFAULT_BODY_LIMIT,
    };
    Ok(RouterConfig {
        case_sensitive,
        strict,
        body_limit,
    })
}

/// Load config from a JSON file. Missing keys take their defaults.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<RouterConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    let config: RouterConfig =
        serde_json::from_str(&raw).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "router config loaded");
    Ok(config)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Validation(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}

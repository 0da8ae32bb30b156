use crate::app_config::{AppConfig, Environment, ProviderKind};
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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let env = parse_environment(&or_default("BRIGHTRANK_ENV", "development"))?;
    let log_level = or_default("BRIGHTRANK_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("BRIGHTRANK_DATA_DIR", "./.brightrank"));
    let provider = parse_provider(&or_default("BRIGHTRANK_PROVIDER", "mock"))?;

    let gemini_api_key = lookup("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    if provider == ProviderKind::Gemini && gemini_api_key.is_none() {
        return Err(ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()));
    }
    let gemini_model = or_default("BRIGHTRANK_GEMINI_MODEL", "gemini-2.5-flash");
    let gemini_base_url = or_default(
        "BRIGHTRANK_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com/",
    );

    let request_timeout_secs = parse_u64("BRIGHTRANK_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("BRIGHTRANK_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("BRIGHTRANK_RETRY_BACKOFF_BASE_MS", "1000")?;

    let mock_min_latency_ms = parse_u64("BRIGHTRANK_MOCK_MIN_LATENCY_MS", "500")?;
    let mock_max_latency_ms = parse_u64("BRIGHTRANK_MOCK_MAX_LATENCY_MS", "1000")?;
    if mock_min_latency_ms > mock_max_latency_ms {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRIGHTRANK_MOCK_MIN_LATENCY_MS".to_string(),
            reason: format!(
                "{mock_min_latency_ms} exceeds BRIGHTRANK_MOCK_MAX_LATENCY_MS ({mock_max_latency_ms})"
            ),
        });
    }

    let history_limit = parse_usize("BRIGHTRANK_HISTORY_LIMIT", "20")?;
    if history_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BRIGHTRANK_HISTORY_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        provider,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        request_timeout_secs,
        max_retries,
        retry_backoff_base_ms,
        mock_min_latency_ms,
        mock_max_latency_ms,
        history_limit,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRIGHTRANK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_provider(s: &str) -> Result<ProviderKind, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "mock" => Ok(ProviderKind::Mock),
        "gemini" => Ok(ProviderKind::Gemini),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRIGHTRANK_PROVIDER".to_string(),
            reason: format!("unknown provider '{other}'; expected 'mock' or 'gemini'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

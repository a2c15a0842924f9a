use dotenvy::dotenv;
use reqwest::Url;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HRM_API_URL is not a valid absolute url: {0}")]
    InvalidApiUrl(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("LOG_LEVEL is not a valid filter: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base of every backend endpoint, always ending in `/`
    pub api_base_url: Url,

    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let api_url =
            env::var("HRM_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api/".to_string());

        Ok(Self {
            api_base_url: parse_base_url(&api_url)?,
            log_dir: non_empty("LOG_DIR", env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()))?,
            log_file: non_empty(
                "LOG_FILE",
                env::var("LOG_FILE").unwrap_or_else(|_| "hrm.log".to_string()),
            )?,
            log_level: parse_log_level(
                env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
            )?,
        })
    }

    /// Replace the backend base url, e.g. from a command-line override.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_base_url(raw)?;
        Ok(self)
    }
}

/// Endpoints are joined relative to the base, so a missing trailing slash
/// would silently drop the last path segment.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty("HRM_API_URL"));
    }

    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| ConfigError::InvalidApiUrl(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidApiUrl(with_slash));
    }
    Ok(url)
}

/// Accepts anything `EnvFilter` understands, e.g. `info` or `hrm_console=debug,warn`.
pub fn parse_log_level(raw: String) -> Result<String, ConfigError> {
    let raw = non_empty("LOG_LEVEL", raw)?;
    EnvFilter::try_new(&raw).map_err(|e| ConfigError::InvalidLogLevel(e.to_string()))?;
    Ok(raw)
}

fn non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty(name))
    } else {
        Ok(value)
    }
}

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GOOGLE_API_KEY not found. Set it in the environment, a .env file or GOOGLE_API_KEY_FILE")]
    MissingApiKey,
    #[error("failed to read api key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub vision_model: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = resolve_api_key(&lookup)?;

        let timeout_secs = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid {
                    name: "GEMINI_TIMEOUT_SECS",
                    value: v,
                })?,
            None => 60,
        };

        let gemini = GeminiConfig {
            api_key,
            base_url: lookup("GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            vision_model: lookup("GEMINI_VISION_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            timeout_secs,
        };
        let port = match lookup("APP_PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "APP_PORT",
                value: v,
            })?,
            None => 8080,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            gemini,
        })
    }
}

fn resolve_api_key<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty()) {
        return Ok(key.trim().to_string());
    }

    // secret mounted as a file (docker/k8s secret store)
    if let Some(path) = lookup("GOOGLE_API_KEY_FILE") {
        let path = PathBuf::from(path);
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::KeyFile { path, source })?;
        let key = raw.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    Err(ConfigError::MissingApiKey)
}

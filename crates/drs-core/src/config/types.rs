//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Inference endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub base_url: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Vision model identifier
    pub model: String,

    /// Request timeout in seconds. Unset keeps the HTTP client default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.endpoints.anyscale.com/v1".to_string(),
            api_key: "${ANYSCALE_API_KEY}".to_string(),
            model: "llava-hf/llava-v1.6-mistral-7b-hf".to_string(),
            timeout_secs: None,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key, expanding a `${ENV_VAR}` reference.
    pub fn resolved_api_key(&self) -> Result<String, crate::error::ConfigError> {
        resolve_env_var(&self.api_key).ok_or_else(|| {
            let name = env_var_name(&self.api_key).unwrap_or("ANYSCALE_API_KEY");
            crate::error::ConfigError::MissingApiKey(name.to_string())
        })
    }
}

/// Review behavior shared by every front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Strip markdown code fences from the model's answer
    pub normalize: bool,

    /// Image reviewed by `drs review` when no path is given
    pub sample_image: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            sample_image: "data/example2.png".to_string(),
        }
    }
}

/// Web widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the upload widget listens on
    pub bind: String,

    /// Largest accepted upload in megabytes
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:7860".to_string(),
            max_upload_mb: 20,
        }
    }
}

impl ServerConfig {
    /// Upload limit in bytes, saturating instead of overflowing.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if let Some(name) = env_var_name(value) {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn env_var_name(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
}

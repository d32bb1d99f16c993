//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use eco_assistant::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use eco_data::{CatalogSource, RetryPolicy};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in the working directory and its parents.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["ecocart.toml", ".ecocart.toml", "ecocart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Text-generation backend.
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Order history.
    #[serde(default)]
    pub orders: OrdersConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product API URL. The bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_max_retries() -> u32 {
    1
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl CatalogConfig {
    pub fn source(&self) -> CatalogSource {
        CatalogSource::from_endpoint(self.endpoint.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries)
    }
}

/// Text-generation backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Generative Language API root.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AssistantConfig {
    /// API key from the configured environment variable, if set and non-blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Order history configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// JSON file holding an array of orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Generate a default ecocart.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# EcoCart configuration

[catalog]
# endpoint = "http://localhost:5000/api/products"
timeout_ms = {timeout_ms}
max_retries = {max_retries}

[assistant]
endpoint = "{endpoint}"
model = "{model}"
api_key_env = "{api_key_env}"
timeout_secs = {timeout_secs}

[orders]
# path = "orders.json"
"#,
        timeout_ms = default_timeout_ms(),
        max_retries = default_max_retries(),
        endpoint = default_endpoint(),
        model = default_model(),
        api_key_env = default_api_key_env(),
        timeout_secs = default_timeout_secs(),
    )
}

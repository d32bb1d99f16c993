//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eco_assistant::{Assistant, GeminiClient, GeminiConfig, OfflineGenerator, TextGenerator};
use eco_commerce::orders::{InMemoryOrders, Order};
use eco_data::{load_catalog, CatalogLoad, FetchClient};
use tracing::debug;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration was read from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "Loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the configured catalog, falling back to the bundled one.
    pub async fn load_catalog(&self) -> Result<CatalogLoad> {
        let catalog = &self.config.catalog;
        let client = FetchClient::new(catalog.timeout())
            .context("Failed to create HTTP client")?
            .with_retry(catalog.retry_policy());

        let spinner = self.output.spinner("Loading catalog...");
        let load = load_catalog(&client, &catalog.source()).await;
        spinner.finish_and_clear();

        if load.origin.is_fallback() {
            self.output.warn(&format!("Using bundled catalog: {}", load.origin.describe()));
        } else {
            self.output.debug(&format!("Catalog: {}", load.origin.describe()));
        }
        if !load.rejected.is_empty() {
            self.output
                .warn(&format!("Skipped {} malformed product record(s)", load.rejected.len()));
        }

        Ok(load)
    }

    /// Read the order history file. No file configured means no orders.
    pub fn load_orders(&self) -> Result<InMemoryOrders> {
        let Some(path) = &self.config.orders.path else {
            return Ok(InMemoryOrders::empty());
        };

        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read orders file: {}", path.display()))?;
        let orders: Vec<Order> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse orders file: {}", path.display()))?;

        self.output.debug(&format!("Loaded {} order(s)", orders.len()));
        Ok(InMemoryOrders::new(orders))
    }

    /// Text-generation backend. Without an API key every request fails.
    pub fn generator(&self) -> Result<Arc<dyn TextGenerator>> {
        let assistant = &self.config.assistant;
        let Some(api_key) = assistant.api_key() else {
            self.output.debug(&format!(
                "{} is not set, general questions will not be answered",
                assistant.api_key_env
            ));
            return Ok(Arc::new(OfflineGenerator));
        };

        let config = GeminiConfig::new(api_key)
            .with_endpoint(assistant.endpoint.clone())
            .with_model(assistant.model.clone())
            .with_timeout(assistant.timeout());
        let client = GeminiClient::new(config).context("Failed to create text-generation client")?;
        Ok(Arc::new(client))
    }

    /// Assemble an assistant from the catalog, orders and generator.
    pub async fn assistant(&self) -> Result<Assistant> {
        let load = self.load_catalog().await?;
        let orders = self.load_orders()?;
        let generator = self.generator()?;
        Ok(Assistant::new(load.catalog, Arc::new(orders), generator))
    }
}

//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    // Catalog section
    let catalog = &ctx.config.catalog;
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("endpoint", catalog.endpoint.as_deref().unwrap_or("(bundled)"));
    ctx.output.kv("timeout_ms", &catalog.timeout_ms.to_string());
    ctx.output.kv("max_retries", &catalog.max_retries.to_string());

    // Assistant section
    let assistant = &ctx.config.assistant;
    ctx.output.info("");
    ctx.output.info("[assistant]");
    ctx.output.kv("endpoint", &assistant.endpoint);
    ctx.output.kv("model", &assistant.model);
    let key_state = if assistant.api_key().is_some() { "set" } else { "not set" };
    ctx.output.kv("api_key_env", &format!("{} ({})", assistant.api_key_env, key_state));
    ctx.output.kv("timeout_secs", &assistant.timeout_secs.to_string());

    // Orders section
    ctx.output.info("");
    ctx.output.info("[orders]");
    ctx.output.kv("path", ctx.config.orders.path.as_deref().unwrap_or("(none)"));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("ecocart.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // Check catalog endpoint
    if let Some(endpoint) = &ctx.config.catalog.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            errors.push(format!("catalog.endpoint '{}' must be an http(s) URL", endpoint));
        }
    }
    if ctx.config.catalog.timeout_ms == 0 {
        errors.push("catalog.timeout_ms must be greater than 0".to_string());
    }
    if ctx.config.catalog.max_retries > 5 {
        warnings.push(format!(
            "catalog.max_retries = {} delays the fallback to the bundled catalog",
            ctx.config.catalog.max_retries
        ));
    }

    // Check assistant settings
    let assistant = &ctx.config.assistant;
    if assistant.model.trim().is_empty() {
        errors.push("assistant.model is required".to_string());
    }
    if !assistant.endpoint.starts_with("http://") && !assistant.endpoint.starts_with("https://") {
        errors.push(format!("assistant.endpoint '{}' must be an http(s) URL", assistant.endpoint));
    }
    if assistant.timeout_secs == 0 {
        errors.push("assistant.timeout_secs must be greater than 0".to_string());
    }
    if assistant.api_key().is_none() {
        warnings.push(format!(
            "{} is not set; general questions will not be answered",
            assistant.api_key_env
        ));
    }

    // Check orders file
    if let Some(path) = &ctx.config.orders.path {
        if !ctx.resolve_path(path).exists() {
            errors.push(format!("orders.path '{}' does not exist", path));
        }
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

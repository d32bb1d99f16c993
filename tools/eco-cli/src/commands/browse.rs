//! List catalog products.

use anyhow::{bail, Result};
use eco_commerce::catalog::EcoTier;
use eco_commerce::search::browse;

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let min_tier = args.tier.as_deref().map(parse_tier).transpose()?;
    let load = ctx.load_catalog().await?;

    let products: Vec<_> = browse(&args.term, &load.catalog)
        .into_iter()
        .filter(|p| min_tier.map_or(true, |tier| tier_rank(p.tier()) >= tier_rank(tier)))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if args.term.trim().is_empty() {
        ctx.output.header("Catalog");
    } else {
        ctx.output.header(&format!("Products matching \"{}\"", args.term.trim()));
    }

    if products.is_empty() {
        ctx.output.info("No products found");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "NAME", "BRAND", "PRICE", "ECO", "TIER"],
        &[4, 32, 14, 8, 3, 0],
    );
    for product in &products {
        ctx.output.product_row(product);
    }
    ctx.output.info(&format!("{} product(s)", products.len()));

    Ok(())
}

fn parse_tier(value: &str) -> Result<EcoTier> {
    match value.to_lowercase().as_str() {
        "high" => Ok(EcoTier::High),
        "medium" => Ok(EcoTier::Medium),
        "low" => Ok(EcoTier::Low),
        other => bail!("Unknown tier '{}'. Use high, medium or low.", other),
    }
}

fn tier_rank(tier: EcoTier) -> u8 {
    match tier {
        EcoTier::Low => 0,
        EcoTier::Medium => 1,
        EcoTier::High => 2,
    }
}

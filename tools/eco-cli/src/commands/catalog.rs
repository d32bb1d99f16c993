//! Catalog summary.

use anyhow::Result;
use eco_commerce::catalog::EcoTier;
use serde_json::json;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::tier_badge;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let load = ctx.load_catalog().await?;
    let catalog = &load.catalog;

    let count_tier = |tier: EcoTier| catalog.iter().filter(|p| p.tier() == tier).count();

    if ctx.output.is_json() {
        let rejected: Vec<_> = load
            .rejected
            .iter()
            .map(|r| json!({ "index": r.index, "reason": r.reason.to_string() }))
            .collect();
        ctx.output.json(&json!({
            "origin": load.origin.describe(),
            "fallback": load.origin.is_fallback(),
            "products": catalog.len(),
            "tiers": {
                "high": count_tier(EcoTier::High),
                "medium": count_tier(EcoTier::Medium),
                "low": count_tier(EcoTier::Low),
            },
            "rejected": rejected,
        }));
        return Ok(());
    }

    ctx.output.header("Catalog");
    ctx.output.kv("Source", &load.origin.describe());
    ctx.output.kv("Products", &catalog.len().to_string());
    for tier in [EcoTier::High, EcoTier::Medium, EcoTier::Low] {
        ctx.output.kv(&tier_badge(tier), &count_tier(tier).to_string());
    }
    ctx.output.kv("Rejected records", &load.rejected.len().to_string());

    if args.rejected {
        for rejected in &load.rejected {
            ctx.output.list_item(&format!("#{}: {}", rejected.index, rejected.reason));
        }
    }

    Ok(())
}

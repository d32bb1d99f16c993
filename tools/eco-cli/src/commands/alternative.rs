//! Greener-alternative lookup.

use anyhow::{Context as _, Result};
use eco_assistant::explain_alternative;
use eco_commerce::ids::ProductId;
use eco_commerce::recommend::{AlternativeRanker, EcoScoreRanker};
use serde_json::json;

use super::AlternativeArgs;
use crate::context::Context;
use crate::output::tier_badge;

/// Run the alternative command.
pub async fn run(args: AlternativeArgs, ctx: &Context) -> Result<()> {
    let load = ctx.load_catalog().await?;
    let product = load.catalog.require(&ProductId::new(args.product.as_str()))?;
    let alternative = EcoScoreRanker.find_alternative(product, load.catalog.products());

    let explanation = match (alternative, args.explain) {
        (Some(alternative), true) => {
            let generator = ctx.generator()?;
            let spinner = ctx.output.spinner("Asking EcoGuide...");
            let result = explain_alternative(generator.as_ref(), product, alternative).await;
            spinner.finish_and_clear();
            Some(result.context("Couldn't get an explanation. Please try again later.")?)
        }
        _ => None,
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "alternative": alternative,
            "explanation": explanation,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Eco-score", &format!("{} ({})", product.eco_score, tier_badge(product.tier())));

    let Some(alternative) = alternative else {
        ctx.output.success("This product is already the greenest choice in the catalog");
        return Ok(());
    };

    ctx.output.info(&format!(
        "Greener alternative: {} ({})",
        alternative.name,
        alternative.price.display_compact()
    ));
    ctx.output.kv(
        "Eco-score",
        &format!("{} ({})", alternative.eco_score, tier_badge(alternative.tier())),
    );
    if !alternative.materials.is_empty() {
        ctx.output.kv("Materials", &alternative.materials.join(", "));
    }
    if !alternative.certifications.is_empty() {
        ctx.output.kv("Certifications", &alternative.certifications.join(", "));
    }

    if let Some(explanation) = explanation {
        ctx.output.reply(&explanation);
    }

    Ok(())
}

//! Greener-alternative selection.

use std::cmp::Ordering;

use crate::catalog::Product;

/// Picks a substitute for a product out of a catalog.
///
/// Implementations must never return the input product (same id) and never
/// return a candidate whose eco-score is less than or equal to the input's.
pub trait AlternativeRanker: Send + Sync {
    fn find_alternative<'a>(&self, product: &Product, catalog: &'a [Product]) -> Option<&'a Product>;
}

/// Strict eco-score dominance: highest score wins, lowest id breaks ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcoScoreRanker;

impl AlternativeRanker for EcoScoreRanker {
    fn find_alternative<'a>(&self, product: &Product, catalog: &'a [Product]) -> Option<&'a Product> {
        find_alternative(product, catalog)
    }
}

/// The greenest catalog entry that strictly beats `product`'s eco-score.
///
/// Returns `None` when nothing in the catalog scores higher.
pub fn find_alternative<'a>(product: &Product, catalog: &'a [Product]) -> Option<&'a Product> {
    catalog
        .iter()
        .filter(|candidate| candidate.id != product.id && candidate.eco_score > product.eco_score)
        .min_by(|a, b| rank(a, b))
}

/// Orders better candidates first.
fn rank(a: &Product, b: &Product) -> Ordering {
    b.eco_score.cmp(&a.eco_score).then_with(|| a.id.cmp(&b.id))
}

/// Prompt asking a text generator why `alternative` is the greener choice.
pub fn explanation_prompt(product: &Product, alternative: &Product) -> String {
    format!(
        "Compare these two products for eco-friendliness and explain why the second is a greener choice.\n{}\n{}",
        describe(1, product),
        describe(2, alternative)
    )
}

fn describe(position: usize, product: &Product) -> String {
    format!(
        "Product {}: {}, Materials: {}, Certifications: {}, EcoScore: {}.",
        position,
        product.name,
        product.materials.join(", "),
        product.certifications.join(", "),
        product.eco_score
    )
}

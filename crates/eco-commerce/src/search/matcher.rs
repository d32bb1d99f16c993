//! Catalog text matching for the shopping assistant.
//!
//! Name matches are tried first; material-tag matches are only consulted
//! when no name matches. The first non-empty result wins.

use crate::catalog::{Catalog, Product};
use crate::search::SearchQuery;

/// Which matching pass produced the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Name,
    Material,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Name => "name",
            MatchKind::Material => "material",
        }
    }
}

/// Outcome of a product search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// At least one product matched; products keep catalog order.
    Found {
        kind: MatchKind,
        products: Vec<&'a Product>,
    },
    /// Neither pass matched anything.
    NoMatch,
}

impl<'a> SearchOutcome<'a> {
    pub fn products(&self) -> &[&'a Product] {
        match self {
            SearchOutcome::Found { products, .. } => products,
            SearchOutcome::NoMatch => &[],
        }
    }

    pub fn kind(&self) -> Option<MatchKind> {
        match self {
            SearchOutcome::Found { kind, .. } => Some(*kind),
            SearchOutcome::NoMatch => None,
        }
    }
}

/// The query contains the full product name, or any query word appears
/// inside the product name.
pub fn matches_name(query: &SearchQuery, product: &Product) -> bool {
    let name = product.name_key();
    query.as_str().contains(&name) || query.words().any(|word| name.contains(word))
}

/// Any query word appears inside the space-joined material tags.
pub fn matches_material(query: &SearchQuery, product: &Product) -> bool {
    let materials = product.materials_key();
    query.words().any(|word| materials.contains(word))
}

/// Search the catalog, name pass first, material pass second.
pub fn search<'a>(query: &SearchQuery, catalog: &'a Catalog) -> SearchOutcome<'a> {
    let passes: [(MatchKind, fn(&SearchQuery, &Product) -> bool); 2] = [
        (MatchKind::Name, matches_name),
        (MatchKind::Material, matches_material),
    ];

    for (kind, matcher) in passes {
        let products: Vec<_> = catalog.iter().filter(|p| matcher(query, p)).collect();
        if !products.is_empty() {
            return SearchOutcome::Found { kind, products };
        }
    }
    SearchOutcome::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_catalog;

    fn names(outcome: &SearchOutcome<'_>) -> Vec<String> {
        outcome.products().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_full_name_in_query() {
        let catalog = bundled_catalog();
        let outcome = search(&SearchQuery::new("do you sell the bamboo toothbrush?"), &catalog);
        assert_eq!(outcome.kind(), Some(MatchKind::Name));
        assert!(names(&outcome).contains(&"Bamboo Toothbrush".to_string()));
    }

    #[test]
    fn test_single_word_matches_name() {
        let catalog = bundled_catalog();
        let outcome = search(&SearchQuery::new("bamboo"), &catalog);
        assert_eq!(outcome.kind(), Some(MatchKind::Name));
        assert_eq!(names(&outcome), vec!["Bamboo Toothbrush"]);
    }

    #[test]
    fn test_material_pass_only_when_no_name_matches() {
        let catalog = bundled_catalog();
        let outcome = search(&SearchQuery::new("arabica"), &catalog);
        assert_eq!(outcome.kind(), Some(MatchKind::Material));
        assert_eq!(names(&outcome), vec!["Fair Trade Coffee Beans"]);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let catalog = bundled_catalog();
        let outcome = search(&SearchQuery::new("plastic"), &catalog);
        assert_eq!(
            names(&outcome),
            vec!["Recycled Plastic Water Bottle", "Conventional Plastic Bag"]
        );
    }

    #[test]
    fn test_no_match() {
        let catalog = bundled_catalog();
        assert_eq!(search(&SearchQuery::new("zzz"), &catalog), SearchOutcome::NoMatch);
    }

    #[test]
    fn test_repeated_spaces_do_not_match_everything() {
        let catalog = bundled_catalog();
        assert_eq!(search(&SearchQuery::new("zzz   qqq"), &catalog), SearchOutcome::NoMatch);
    }
}

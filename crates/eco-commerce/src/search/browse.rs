//! Catalog browsing filter.

use crate::catalog::{Catalog, Product};

/// Products whose name, brand, or comma-joined materials contain `term`,
/// case-insensitively. A blank term keeps the whole catalog.
pub fn browse<'a>(term: &str, catalog: &'a Catalog) -> Vec<&'a Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.brand.to_lowercase().contains(&term)
                || p.materials.join(", ").to_lowercase().contains(&term)
        })
        .collect()
}

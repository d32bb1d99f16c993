//! Saved-for-later products.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// An ordered wishlist holding each product at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product. Returns `false` if a product with the same id is
    /// already saved, leaving the wishlist unchanged.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Remove a product by id. Returns `true` if it was present.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| &p.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_catalog;

    #[test]
    fn test_add_is_deduplicated_by_id() {
        let catalog = bundled_catalog();
        let mut wishlist = Wishlist::new();

        assert!(wishlist.add(catalog.products()[0].clone()));
        assert!(!wishlist.add(catalog.products()[0].clone()));
        assert!(wishlist.add(catalog.products()[2].clone()));
        assert_eq!(wishlist.len(), 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let catalog = bundled_catalog();
        let mut wishlist = Wishlist::new();
        for product in catalog.iter() {
            wishlist.add(product.clone());
        }

        assert!(wishlist.remove(&ProductId::new("3")));
        assert!(!wishlist.remove(&ProductId::new("3")));
        assert!(!wishlist.contains(&ProductId::new("3")));

        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}

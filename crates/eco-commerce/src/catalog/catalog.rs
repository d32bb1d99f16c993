//! The ordered product collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::record::{normalize, RawProductRecord, RecordRejection, Rejected};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Ordered collection of products available for search and recommendation.
///
/// A catalog is built wholesale and replaced wholesale; individual entries
/// are never edited in place. Identifiers are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Result of building a catalog from untrusted records.
#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub rejected: Vec<Rejected>,
}

impl Catalog {
    /// Build a catalog from already validated products.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize records in order, keeping the first product for each id.
    ///
    /// Never fails as a whole: every record that does not make it into the
    /// catalog is reported in [`CatalogBuild::rejected`].
    pub fn from_records<I>(records: I) -> CatalogBuild
    where
        I: IntoIterator<Item = RawProductRecord>,
    {
        let mut products = Vec::new();
        let mut rejected = Vec::new();
        let mut seen = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            let outcome = normalize(&record, index).and_then(|product| {
                if seen.insert(product.id.clone()) {
                    Ok(product)
                } else {
                    Err(RecordRejection::DuplicateId(product.id.to_string()))
                }
            });
            match outcome {
                Ok(product) => products.push(product),
                Err(reason) => {
                    warn!(index, %reason, "Rejected catalog record");
                    rejected.push(Rejected { index, reason });
                }
            }
        }

        CatalogBuild {
            catalog: Self { products },
            rejected,
        }
    }

    /// Replace every entry at once.
    pub fn replace(&mut self, other: Catalog) {
        *self = other;
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing when absent.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

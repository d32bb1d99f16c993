//! Product catalog module.
//!
//! Contains products, eco-scores, the catalog collection and the
//! normalization boundary for externally supplied records.

mod bundled;
#[allow(clippy::module_inception)]
mod catalog;
mod product;
pub mod record;

pub use bundled::bundled_catalog;
pub use catalog::{Catalog, CatalogBuild};
pub use product::{EcoScore, EcoTier, Product};
pub use record::{normalize, RawProductRecord, RecordRejection, Rejected, PLACEHOLDER_IMAGE};

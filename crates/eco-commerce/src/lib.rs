//! Catalog, eco-score and recommendation types for EcoCart.
//!
//! - **Catalog**: products, eco-scores and tiers, the bundled catalog, and
//!   the normalization boundary for remote product records
//! - **Search**: assistant product search (name pass, then material pass)
//!   and storefront browsing
//! - **Recommend**: greener-alternative selection
//! - **Orders**: read-only order history
//! - **Wishlist**: saved products
//!
//! # Example
//!
//! ```rust
//! use eco_commerce::prelude::*;
//!
//! let catalog = bundled_catalog();
//! let bag = catalog.get(&ProductId::new("4")).unwrap();
//!
//! let greener = find_alternative(bag, catalog.products()).unwrap();
//! assert_eq!(greener.name, "Organic Cotton T-Shirt");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod orders;
pub mod recommend;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        bundled_catalog, Catalog, CatalogBuild, EcoScore, EcoTier, Product, RawProductRecord,
        RecordRejection, Rejected,
    };

    // Orders
    pub use crate::orders::{InMemoryOrders, Order, OrderLine, OrderStore};

    // Recommend
    pub use crate::recommend::{explanation_prompt, find_alternative, AlternativeRanker, EcoScoreRanker};

    // Search
    pub use crate::search::{browse, search, MatchKind, SearchOutcome, SearchQuery};

    pub use crate::wishlist::Wishlist;
}

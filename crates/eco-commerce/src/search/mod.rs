//! Search module.
//!
//! Assistant-style product search and storefront browsing.

mod browse;
mod matcher;
mod query;

pub use browse::browse;
pub use matcher::{matches_material, matches_name, search, MatchKind, SearchOutcome};
pub use query::SearchQuery;

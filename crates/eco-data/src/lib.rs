//! HTTP data access for EcoCart.
//!
//! This crate provides:
//! - `FetchClient` - JSON over HTTP with per-attempt timeout and retry
//! - `RetryPolicy` - Retry strategies and backoff
//! - `CatalogSource` / `load_catalog` - Catalog loading with bundled fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use eco_data::{load_catalog, CatalogSource, FetchClient, RetryPolicy};
//!
//! let client = FetchClient::new(std::time::Duration::from_secs(3))?
//!     .with_retry(RetryPolicy::new(1));
//! let source = CatalogSource::from_endpoint(Some("http://localhost:5000/api/products"));
//!
//! let load = load_catalog(&client, &source).await;
//! println!("{} products ({})", load.catalog.len(), load.origin.describe());
//! ```

mod client;
mod error;
mod retry;
mod source;

pub use client::{FetchClient, DEFAULT_TIMEOUT};
pub use error::{FetchError, MAX_ERROR_BODY};
pub use retry::{BackoffStrategy, RetryCondition, RetryPolicy};
pub use source::{load_catalog, CatalogLoad, CatalogOrigin, CatalogSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{load_catalog, CatalogLoad, CatalogOrigin, CatalogSource, FetchClient, FetchError, RetryPolicy};
}

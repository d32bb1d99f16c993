//! Catalog sources.

use eco_commerce::catalog::{bundled_catalog, Catalog, RawProductRecord, Rejected};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::FetchClient;
use crate::FetchError;

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the storefront.
    Bundled,
    /// A JSON array of product records served over HTTP.
    Remote { url: String },
}

impl CatalogSource {
    /// Remote when an endpoint is configured, bundled otherwise.
    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(url) => CatalogSource::Remote {
                url: url.to_string(),
            },
            None => CatalogSource::Bundled,
        }
    }
}

/// How the loaded catalog was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Bundled,
    Remote { url: String },
    /// The remote source failed or returned nothing usable.
    Fallback { reason: String },
}

impl CatalogOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CatalogOrigin::Fallback { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogOrigin::Bundled => "bundled".to_string(),
            CatalogOrigin::Remote { url } => format!("remote ({})", url),
            CatalogOrigin::Fallback { reason } => format!("bundled fallback ({})", reason),
        }
    }
}

/// A loaded catalog with provenance.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
    /// Records the remote source sent that did not become products.
    pub rejected: Vec<Rejected>,
}

impl CatalogLoad {
    fn bundled(origin: CatalogOrigin) -> Self {
        Self {
            catalog: bundled_catalog(),
            origin,
            rejected: Vec::new(),
        }
    }
}

/// Load the catalog. Never fails: remote problems fall back to the
/// bundled catalog and are reported through [`CatalogLoad::origin`].
pub async fn load_catalog(client: &FetchClient, source: &CatalogSource) -> CatalogLoad {
    let url = match source {
        CatalogSource::Bundled => return CatalogLoad::bundled(CatalogOrigin::Bundled),
        CatalogSource::Remote { url } => url,
    };

    match fetch_records(client, url).await {
        Ok(records) if records.is_empty() => {
            warn!(url = %url, "Remote catalog is empty, using bundled catalog");
            CatalogLoad::bundled(CatalogOrigin::Fallback {
                reason: "remote catalog is empty".to_string(),
            })
        }
        Ok(records) => {
            let build = Catalog::from_records(records);
            if build.catalog.is_empty() {
                warn!(url = %url, rejected = build.rejected.len(), "No usable remote records, using bundled catalog");
                return CatalogLoad {
                    rejected: build.rejected,
                    ..CatalogLoad::bundled(CatalogOrigin::Fallback {
                        reason: "no usable records".to_string(),
                    })
                };
            }
            info!(
                url = %url,
                products = build.catalog.len(),
                rejected = build.rejected.len(),
                "Loaded remote catalog"
            );
            CatalogLoad {
                catalog: build.catalog,
                origin: CatalogOrigin::Remote { url: url.clone() },
                rejected: build.rejected,
            }
        }
        Err(err) => {
            warn!(url = %url, error = %err, "Failed to fetch remote catalog, using bundled catalog");
            CatalogLoad::bundled(CatalogOrigin::Fallback {
                reason: err.to_string(),
            })
        }
    }
}

async fn fetch_records(client: &FetchClient, url: &str) -> Result<Vec<RawProductRecord>, FetchError> {
    match client.get_json::<Value>(url).await? {
        Value::Array(items) => Ok(items.into_iter().map(RawProductRecord::from).collect()),
        other => Err(FetchError::ParseError(format!(
            "expected a JSON array of products, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_endpoint() {
        assert_eq!(CatalogSource::from_endpoint(None), CatalogSource::Bundled);
        assert_eq!(CatalogSource::from_endpoint(Some("  ")), CatalogSource::Bundled);
        assert_eq!(
            CatalogSource::from_endpoint(Some("http://localhost:5000/api/products")),
            CatalogSource::Remote {
                url: "http://localhost:5000/api/products".to_string()
            }
        );
    }

    #[test]
    fn test_origin_describe() {
        let origin = CatalogOrigin::Fallback {
            reason: "Request timed out".to_string(),
        };
        assert!(origin.is_fallback());
        assert_eq!(origin.describe(), "bundled fallback (Request timed out)");
    }

    #[tokio::test]
    async fn test_bundled_source_skips_network() {
        let client = FetchClient::new(crate::DEFAULT_TIMEOUT).unwrap();
        let load = load_catalog(&client, &CatalogSource::Bundled).await;
        assert_eq!(load.origin, CatalogOrigin::Bundled);
        assert_eq!(load.catalog, bundled_catalog());
    }
}

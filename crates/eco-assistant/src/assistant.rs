//! Intent dispatch.

use std::sync::Arc;

use eco_commerce::catalog::{Catalog, Product};
use eco_commerce::orders::OrderStore;
use eco_commerce::recommend::explanation_prompt;
use tracing::debug;

use crate::error::GenerationError;
use crate::generator::TextGenerator;
use crate::handlers;
use crate::intent::{classify, Intent};

/// Answers chat messages from the catalog, the order history and the
/// text-generation backend.
#[derive(Clone)]
pub struct Assistant {
    catalog: Catalog,
    orders: Arc<dyn OrderStore>,
    generator: Arc<dyn TextGenerator>,
}

impl Assistant {
    pub fn new(catalog: Catalog, orders: Arc<dyn OrderStore>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            catalog,
            orders,
            generator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Swap in a freshly loaded catalog.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog.replace(catalog);
    }

    /// Classify and answer a message.
    pub async fn respond(&self, text: &str) -> Result<String, GenerationError> {
        let intent = classify(text);
        debug!(intent = intent.as_str(), "Classified message");
        self.answer(&intent, text).await
    }

    /// Answer an already classified message. `text` is the raw message, sent
    /// as-is to the generator for general questions.
    pub async fn answer(&self, intent: &Intent, text: &str) -> Result<String, GenerationError> {
        match intent {
            Intent::OrderStatus => Ok(handlers::order_status(&self.orders.orders())),
            Intent::ReturnPolicy => Ok(handlers::return_policy()),
            Intent::ProductSearch { query } => Ok(handlers::product_search(query, &self.catalog)),
            Intent::General => self.generator.ask(text).await,
        }
    }
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("catalog", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

/// Ask the generator why `alternative` is greener than `product`.
pub async fn explain_alternative(
    generator: &dyn TextGenerator,
    product: &Product,
    alternative: &Product,
) -> Result<String, GenerationError> {
    debug!(product = %product.id, alternative = %alternative.id, "Requesting alternative explanation");
    generator.ask(&explanation_prompt(product, alternative)).await
}

//! Barcode lookup that falls back across product databases.
//!
//! Open Food Facts is asked first because it carries nutrition data; when it
//! fails for any reason, UPCitemdb is asked for at least a product name. Each
//! source gets exactly one request.

use foodscan_core::{AppConfig, ProductSource, ProductSummary};

use crate::error::{FetchError, LookupError};
use crate::off::OpenFoodFactsClient;
use crate::upcitemdb::UpcItemDbClient;

#[derive(Debug, Clone)]
pub struct ProductLookup {
    open_food_facts: OpenFoodFactsClient,
    upc_item_db: UpcItemDbClient,
}

impl ProductLookup {
    #[must_use]
    pub fn new(open_food_facts: OpenFoodFactsClient, upc_item_db: UpcItemDbClient) -> Self {
        Self {
            open_food_facts,
            upc_item_db,
        }
    }

    /// Builds both clients from the `FOODSCAN_*` settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if either client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Ok(Self::new(
            OpenFoodFactsClient::from_config(config)?,
            UpcItemDbClient::from_config(config)?,
        ))
    }

    /// Finds `barcode` in Open Food Facts, falling back to UPCitemdb.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] carrying both sources' errors when
    /// neither returns a product.
    pub async fn lookup(&self, barcode: &str) -> Result<ProductSummary, LookupError> {
        let off_error = match self.open_food_facts.fetch_product(barcode).await {
            Ok(product) => {
                tracing::debug!(barcode, "found product in Open Food Facts");
                return Ok(ProductSummary {
                    name: product.product_name,
                    source: ProductSource::OpenFoodFacts,
                    nutriments: Some(product.nutriments.unwrap_or_default()),
                });
            }
            Err(error) => error,
        };
        tracing::debug!(barcode, error = %off_error, "Open Food Facts miss, trying UPCitemdb");

        match self.upc_item_db.lookup(barcode).await {
            Ok(item) => {
                tracing::debug!(barcode, "found product in UPCitemdb");
                Ok(ProductSummary {
                    name: item.title,
                    source: ProductSource::UpcItemDb,
                    nutriments: None,
                })
            }
            Err(upc_error) => Err(LookupError::NotFound {
                barcode: barcode.to_owned(),
                open_food_facts: off_error,
                upc_item_db: upc_error,
            }),
        }
    }
}

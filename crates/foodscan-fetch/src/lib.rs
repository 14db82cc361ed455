//! Barcode lookups against public food product databases.
//!
//! [`fetch_product_data`] is the one-call entry point: it asks Open Food
//! Facts for a barcode and returns the reduced [`ExtractedProduct`], or
//! `None` on any failure. [`OpenFoodFactsClient`] exposes the same lookup
//! with a typed [`FetchError`], and [`ProductLookup`] adds a UPCitemdb
//! fallback.

pub mod error;
pub mod extract;
mod http;
pub mod lookup;
pub mod off;
pub mod types;
pub mod upcitemdb;

pub use error::{FetchError, LookupError};
pub use extract::{extract_product, nutriment_value};
pub use foodscan_core::ExtractedProduct;
pub use lookup::ProductLookup;
pub use off::OpenFoodFactsClient;
pub use types::{Nutriments, RemoteProduct, UpcItem};
pub use upcitemdb::UpcItemDbClient;

/// Fetches `barcode` from the public Open Food Facts API with default
/// settings and returns the five-field record, or `None` on any failure.
///
/// Never returns an error; failures are logged at `warn` level.
pub async fn fetch_product_data(barcode: &str) -> Option<ExtractedProduct> {
    match OpenFoodFactsClient::new(off::DEFAULT_TIMEOUT_SECS, None) {
        Ok(client) => client.fetch_product_data(barcode).await,
        Err(error) => {
            tracing::warn!(barcode, %error, "error building product client");
            None
        }
    }
}

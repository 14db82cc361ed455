//! HTTP client for the Open Food Facts product API.
//!
//! One barcode, one GET against `/api/v0/product/{barcode}.json`. The JSON
//! envelope's `status` field decides found (`1`) versus not found (anything
//! else). There are no retries.

use foodscan_core::{AppConfig, ExtractedProduct};
use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::extract::extract_product;
use crate::http::{build_client, get_json, join_segments, parse_base_url};
use crate::types::{RemoteProduct, RemoteProductResponse};

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the Open Food Facts product API.
///
/// Use [`OpenFoodFactsClient::new`] for production or
/// [`OpenFoodFactsClient::with_base_url`] to point at a mock server in tests.
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    client: Client,
    base_url: Url,
}

impl OpenFoodFactsClient {
    /// Creates a client pointed at the public Open Food Facts instance.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: Option<&str>) -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidBaseUrl`] if
    /// `base_url` is not a usable URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: Option<&str>,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Creates a client from the `FOODSCAN_*` settings.
    ///
    /// # Errors
    ///
    /// Same as [`OpenFoodFactsClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(
            &config.off_base_url,
            config.request_timeout_secs,
            config.user_agent.as_deref(),
        )
    }

    /// Fetches the product for `barcode` and reduces it to an
    /// [`ExtractedProduct`], collapsing every failure to `None`.
    ///
    /// Network errors, non-2xx responses, malformed bodies, and unknown
    /// barcodes are indistinguishable to the caller; each is logged at
    /// `warn` level. Use [`OpenFoodFactsClient::fetch_extracted`] when the
    /// cause matters.
    pub async fn fetch_product_data(&self, barcode: &str) -> Option<ExtractedProduct> {
        match self.fetch_extracted(barcode).await {
            Ok(product) => Some(product),
            Err(error) => {
                tracing::warn!(barcode, %error, "error fetching product");
                None
            }
        }
    }

    /// Fetches the product for `barcode` and reduces it to an
    /// [`ExtractedProduct`].
    ///
    /// # Errors
    ///
    /// See [`OpenFoodFactsClient::fetch_product`].
    pub async fn fetch_extracted(&self, barcode: &str) -> Result<ExtractedProduct, FetchError> {
        let product = self.fetch_product(barcode).await?;
        Ok(extract_product(&product))
    }

    /// Fetches the full upstream product for `barcode`, nutriments included.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] if `status != 1` or the server answers 404.
    /// - [`FetchError::Http`] on network or TLS failure.
    /// - [`FetchError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`FetchError::Deserialize`] if the body is not JSON. Product fields
    ///   of the wrong JSON type are read as absent.
    /// - [`FetchError::MissingProduct`] if `status == 1` but `product` is absent.
    pub async fn fetch_product(&self, barcode: &str) -> Result<RemoteProduct, FetchError> {
        let url = self.product_url(barcode);
        let body = get_json(&self.client, &url, barcode).await?;
        Self::check_status(&body, barcode)?;

        let envelope: RemoteProductResponse =
            serde_json::from_value(body).map_err(|e| FetchError::Deserialize {
                context: format!("product({barcode})"),
                source: e,
            })?;

        envelope.product.ok_or_else(|| FetchError::MissingProduct {
            barcode: barcode.to_owned(),
        })
    }

    /// `{base}/api/v0/product/{barcode}.json`, with the barcode encoded as a
    /// single path segment.
    fn product_url(&self, barcode: &str) -> Url {
        let file = format!("{barcode}.json");
        join_segments(&self.base_url, &["api", "v0", "product", &file])
    }

    /// Checks the top-level `"status"` field; anything other than the number
    /// `1` (`1` and `1.0` alike) is a not-found.
    #[allow(clippy::float_cmp)]
    fn check_status(body: &serde_json::Value, barcode: &str) -> Result<(), FetchError> {
        if body.get("status").and_then(serde_json::Value::as_f64) == Some(1.0) {
            return Ok(());
        }
        let reason = body
            .get("status_verbose")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("product not found")
            .to_string();
        Err(FetchError::NotFound {
            barcode: barcode.to_owned(),
            reason,
        })
    }
}

#[cfg(test)]
#[path = "off_test.rs"]
mod tests;

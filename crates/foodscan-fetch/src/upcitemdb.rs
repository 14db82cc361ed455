//! HTTP client for the UPCitemdb trial lookup endpoint.
//!
//! UPCitemdb knows many non-food barcodes that Open Food Facts lacks, but it
//! publishes no nutrition data; it only contributes a product title.

use foodscan_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::http::{build_client, get_json, join_segments, parse_base_url};
use crate::types::{UpcItem, UpcLookupResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.upcitemdb.com";

/// Client for `GET /prod/trial/lookup?upc={barcode}`.
#[derive(Debug, Clone)]
pub struct UpcItemDbClient {
    client: Client,
    base_url: Url,
}

impl UpcItemDbClient {
    /// Creates a client pointed at the public UPCitemdb API.
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
    /// Returns [`FetchError::Http`] or [`FetchError::InvalidBaseUrl`].
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
    /// Same as [`UpcItemDbClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(
            &config.upcitemdb_base_url,
            config.request_timeout_secs,
            config.user_agent.as_deref(),
        )
    }

    /// Looks up `barcode` and returns the first matching item.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`] if `code != "OK"`, `total == 0`, or the
    ///   item list is empty.
    /// - [`FetchError::Http`], [`FetchError::UnexpectedStatus`], or
    ///   [`FetchError::Deserialize`] as for any upstream request.
    pub async fn lookup(&self, barcode: &str) -> Result<UpcItem, FetchError> {
        let url = self.lookup_url(barcode);
        let body = get_json(&self.client, &url, barcode).await?;

        let envelope: UpcLookupResponse =
            serde_json::from_value(body).map_err(|e| FetchError::Deserialize {
                context: format!("upc lookup({barcode})"),
                source: e,
            })?;

        if envelope.code != "OK" || envelope.total == 0 {
            let reason = envelope
                .message
                .unwrap_or_else(|| format!("code {}, total {}", envelope.code, envelope.total));
            return Err(FetchError::NotFound {
                barcode: barcode.to_owned(),
                reason,
            });
        }

        envelope
            .items
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound {
                barcode: barcode.to_owned(),
                reason: "empty item list".to_owned(),
            })
    }

    fn lookup_url(&self, barcode: &str) -> Url {
        let mut url = join_segments(&self.base_url, &["prod", "trial", "lookup"]);
        url.query_pairs_mut().append_pair("upc", barcode);
        url
    }
}

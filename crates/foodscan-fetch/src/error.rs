use thiserror::Error;

/// Errors returned by the upstream product database clients.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The database answered but does not know the barcode (`status != 1`,
    /// an empty UPCitemdb result, or HTTP 404).
    #[error("product {barcode} not found: {reason}")]
    NotFound { barcode: String, reason: String },

    /// Any other non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not JSON or did not have the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// `status == 1` but the body carried no `product` object.
    #[error("response for {barcode} reported success without a product")]
    MissingProduct { barcode: String },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl FetchError {
    /// Returns `true` when the upstream database reported the barcode as unknown.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// Errors returned by [`crate::ProductLookup`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// Every source failed; both underlying errors are kept for diagnostics.
    #[error(
        "no product database returned barcode {barcode} (open food facts: {open_food_facts}; upcitemdb: {upc_item_db})"
    )]
    NotFound {
        barcode: String,
        open_food_facts: FetchError,
        upc_item_db: FetchError,
    },
}

//! Upstream response types.
//!
//! Only the fields this crate reads are modelled; everything else in the
//! payloads is ignored by serde. Open Food Facts fields are read leniently:
//! a value of the wrong JSON type becomes `None` instead of failing the
//! whole body.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Nutrient name → value, exactly as Open Food Facts reports it. Values are
/// usually numbers but units and some values arrive as strings.
pub type Nutriments = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Open Food Facts
// ---------------------------------------------------------------------------

/// Envelope of `GET /api/v0/product/{barcode}.json`.
///
/// `status` is `1` when the product exists; anything else means not found.
#[derive(Debug, Deserialize)]
pub struct RemoteProductResponse {
    #[serde(default, deserialize_with = "lenient_number")]
    pub status: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status_verbose: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    /// `None` when absent or not a JSON object.
    #[serde(default, deserialize_with = "lenient_product")]
    pub product: Option<RemoteProduct>,
}

/// The `product` object of a found response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteProduct {
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brands: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub nutriments: Option<Nutriments>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

fn lenient_object<'de, D>(deserializer: D) -> Result<Option<Nutriments>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

fn lenient_product<'de, D>(deserializer: D) -> Result<Option<RemoteProduct>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => RemoteProduct::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// UPCitemdb
// ---------------------------------------------------------------------------

/// Envelope of `GET /prod/trial/lookup?upc={barcode}`.
///
/// `code` is `"OK"` on success; `total` counts the entries in `items`.
#[derive(Debug, Deserialize)]
pub struct UpcLookupResponse {
    pub code: String,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub items: Vec<UpcItem>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A single item from a UPCitemdb lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct UpcItem {
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

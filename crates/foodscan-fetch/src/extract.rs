//! Reduction of an upstream product to the five-field [`ExtractedProduct`].

use foodscan_core::ExtractedProduct;
use serde_json::Value;

use crate::types::{Nutriments, RemoteProduct};

pub const ENERGY_KCAL: &str = "energy-kcal";
pub const FAT: &str = "fat";
pub const SUGARS: &str = "sugars";
pub const PROTEINS: &str = "proteins";

/// Copies the name and the four tracked nutrients out of `product`.
///
/// Values missing upstream stay `None`; nothing is defaulted.
#[must_use]
pub fn extract_product(product: &RemoteProduct) -> ExtractedProduct {
    let nutriment = |key: &str| {
        product
            .nutriments
            .as_ref()
            .and_then(|n| nutriment_value(n, key))
    };

    ExtractedProduct {
        name: product.product_name.clone(),
        calories: nutriment(ENERGY_KCAL),
        fat: nutriment(FAT),
        sugar: nutriment(SUGARS),
        protein: nutriment(PROTEINS),
    }
}

/// Reads `key` from `nutriments` as a number.
///
/// JSON numbers are taken as-is and decimal strings (`"3.1"`) are parsed.
/// Nulls, non-numeric strings, and non-finite values yield `None`.
#[must_use]
pub fn nutriment_value(nutriments: &Nutriments, key: &str) -> Option<f64> {
    match nutriments.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

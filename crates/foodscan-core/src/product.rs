use serde::{Deserialize, Serialize};

/// The reduced product record returned by a barcode lookup.
///
/// Every field is optional: a value the upstream database does not report
/// stays `None` rather than defaulting to zero, so "unknown" and "zero" remain
/// distinguishable. Numeric fields are per-100g values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractedProduct {
    pub name: Option<String>,
    /// Energy in kilocalories (`energy-kcal`).
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    /// Total sugars (`sugars`).
    pub sugar: Option<f64>,
    /// Total protein (`proteins`).
    pub protein: Option<f64>,
}

impl ExtractedProduct {
    /// Returns `true` when none of the four nutrient values are known.
    #[must_use]
    pub fn has_no_nutrients(&self) -> bool {
        self.calories.is_none()
            && self.fat.is_none()
            && self.sugar.is_none()
            && self.protein.is_none()
    }
}

/// Which upstream database answered a fallback lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    OpenFoodFacts,
    UpcItemDb,
}

impl std::fmt::Display for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSource::OpenFoodFacts => write!(f, "open_food_facts"),
            ProductSource::UpcItemDb => write!(f, "upc_item_db"),
        }
    }
}

/// A product found by trying each upstream database in turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: Option<String>,
    pub source: ProductSource,
    /// Full nutrient map as reported upstream. `None` for sources that do not
    /// publish nutrition data.
    pub nutriments: Option<serde_json::Map<String, serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_serialize_as_null() {
        let product = ExtractedProduct {
            name: Some("Nutella".to_string()),
            calories: Some(539.0),
            fat: None,
            sugar: None,
            protein: Some(6.3),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Nutella",
                "calories": 539.0,
                "fat": null,
                "sugar": null,
                "protein": 6.3
            })
        );
    }

    #[test]
    fn zero_is_not_treated_as_missing() {
        let product = ExtractedProduct {
            fat: Some(0.0),
            ..ExtractedProduct::default()
        };
        assert!(!product.has_no_nutrients());
        assert!(ExtractedProduct::default().has_no_nutrients());
    }

    #[test]
    fn product_source_serializes_snake_case() {
        let json = serde_json::to_string(&ProductSource::UpcItemDb).unwrap();
        assert_eq!(json, "\"upc_item_db\"");
        assert_eq!(ProductSource::OpenFoodFacts.to_string(), "open_food_facts");
    }
}

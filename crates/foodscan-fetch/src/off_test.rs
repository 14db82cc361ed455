use serde_json::json;

use super::*;

fn test_client(base_url: &str) -> OpenFoodFactsClient {
    OpenFoodFactsClient::with_base_url(base_url, 30, None)
        .expect("client construction should not fail")
}

#[test]
fn product_url_uses_v0_template() {
    let client = test_client("https://world.openfoodfacts.org");
    let url = client.product_url("3017620422003");
    assert_eq!(
        url.as_str(),
        "https://world.openfoodfacts.org/api/v0/product/3017620422003.json"
    );
}

#[test]
fn product_url_strips_trailing_slash() {
    let client = test_client("https://world.openfoodfacts.org/");
    let url = client.product_url("737628064502");
    assert_eq!(
        url.as_str(),
        "https://world.openfoodfacts.org/api/v0/product/737628064502.json"
    );
}

#[test]
fn product_url_encodes_special_characters() {
    let client = test_client("https://world.openfoodfacts.org");
    let url = client.product_url("12 34?x=1");
    assert_eq!(
        url.as_str(),
        "https://world.openfoodfacts.org/api/v0/product/12%2034%3Fx=1.json"
    );
}

#[test]
fn check_status_accepts_one() {
    assert!(OpenFoodFactsClient::check_status(&json!({ "status": 1 }), "1").is_ok());
}

#[test]
fn check_status_accepts_float_one() {
    assert!(OpenFoodFactsClient::check_status(&json!({ "status": 1.0 }), "1").is_ok());
    assert!(OpenFoodFactsClient::check_status(&json!({ "status": 1.5 }), "1")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn check_status_rejects_zero_with_verbose_reason() {
    let body = json!({ "status": 0, "status_verbose": "product not found" });
    let err = OpenFoodFactsClient::check_status(&body, "000").unwrap_err();
    assert!(
        matches!(err, FetchError::NotFound { ref barcode, ref reason } if barcode == "000" && reason == "product not found"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn check_status_treats_missing_or_non_numeric_status_as_not_found() {
    assert!(OpenFoodFactsClient::check_status(&json!({}), "1")
        .unwrap_err()
        .is_not_found());
    assert!(OpenFoodFactsClient::check_status(&json!({ "status": "1" }), "1")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = OpenFoodFactsClient::with_base_url("::nope::", 30, None).unwrap_err();
    assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
}

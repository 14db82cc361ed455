//! Plumbing shared by the upstream clients: client construction, base URL
//! normalisation, and the GET-then-parse-JSON step.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::FetchError;

/// Builds a `reqwest::Client` with request and connect timeouts.
///
/// `User-Agent` is only set when one is supplied.
pub(crate) fn build_client(
    timeout_secs: u64,
    user_agent: Option<&str>,
) -> Result<Client, FetchError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10));
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    Ok(builder.build()?)
}

/// Parses `base_url`, requiring a scheme that can carry path segments.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, FetchError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let url = Url::parse(&normalised)
        .map_err(|e| FetchError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidBaseUrl(format!(
            "'{base_url}' cannot carry a path"
        )));
    }
    Ok(url)
}

/// Appends `segments` to `base`, percent-encoding each one so a barcode can
/// never introduce extra path components.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty();
        path.extend(segments);
    }
    url
}

/// Sends a GET request and parses the response body as JSON.
///
/// HTTP 404 maps to [`FetchError::NotFound`]; any other non-2xx status maps
/// to [`FetchError::UnexpectedStatus`].
pub(crate) async fn get_json(
    client: &Client,
    url: &Url,
    barcode: &str,
) -> Result<serde_json::Value, FetchError> {
    tracing::debug!(%url, barcode, "requesting product");
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound {
            barcode: barcode.to_owned(),
            reason: "HTTP 404".to_owned(),
        });
    }
    if !status.is_success() {
        return Err(FetchError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
        context: url.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("https://world.openfoodfacts.org").unwrap();
        assert_eq!(url.as_str(), "https://world.openfoodfacts.org/");
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }

    #[test]
    fn parse_base_url_rejects_non_hierarchical_scheme() {
        let err = parse_base_url("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }

    #[test]
    fn join_segments_keeps_base_path_prefix() {
        let base = parse_base_url("http://127.0.0.1:8080/mirror/").unwrap();
        let url = join_segments(&base, &["api", "v0", "product", "123.json"]);
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mirror/api/v0/product/123.json");
    }

    #[test]
    fn join_segments_encodes_slashes() {
        let base = parse_base_url("https://world.openfoodfacts.org").unwrap();
        let url = join_segments(&base, &["product", "../admin.json"]);
        assert_eq!(
            url.as_str(),
            "https://world.openfoodfacts.org/product/..%2Fadmin.json"
        );
    }
}

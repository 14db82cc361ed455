//! Subcommand handlers.
//!
//! Every handler prints JSON to stdout. A barcode that cannot be resolved
//! prints `null` in place of its record; only configuration or client
//! construction problems make the process exit non-zero.

use foodscan_core::{AppConfig, ExtractedProduct};
use foodscan_fetch::{Nutriments, OpenFoodFactsClient, ProductLookup};
use futures::stream::{self, StreamExt};
use serde::Serialize;

/// One line of `product` output.
#[derive(Debug, Serialize)]
pub(crate) struct ProductLine<'a> {
    pub barcode: &'a str,
    pub product: Option<&'a ExtractedProduct>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NutrientsReport<'a> {
    pub barcode: &'a str,
    pub name: Option<&'a str>,
    pub nutriments: &'a Nutriments,
}

/// Counts of `product` results: how many barcodes resolved, and how many of
/// those came back without any of the four tracked nutrients.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ProductTally {
    pub found: usize,
    pub without_nutrients: usize,
}

pub(crate) fn tally_products<'a, I>(products: I) -> ProductTally
where
    I: IntoIterator<Item = Option<&'a ExtractedProduct>>,
{
    let mut tally = ProductTally::default();
    for product in products.into_iter().flatten() {
        tally.found += 1;
        if product.has_no_nutrients() {
            tally.without_nutrients += 1;
        }
    }
    tally
}

/// Renders one `product` output line.
pub(crate) fn render_product_line(
    barcode: &str,
    product: Option<&ExtractedProduct>,
) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&ProductLine { barcode, product })?)
}

/// Looks up every barcode concurrently (bounded by `max_concurrent`) and
/// prints results in input order. Duplicate barcodes are fetched again.
pub(crate) async fn run_product(config: &AppConfig, barcodes: Vec<String>) -> anyhow::Result<()> {
    let client = OpenFoodFactsClient::from_config(config)?;

    let results = stream::iter(barcodes.into_iter().map(|barcode| {
        let client = client.clone();
        async move {
            let product = client.fetch_product_data(&barcode).await;
            (barcode, product)
        }
    }))
    .buffered(config.max_concurrent)
    .collect::<Vec<_>>()
    .await;

    for (barcode, product) in &results {
        println!("{}", render_product_line(barcode, product.as_ref())?);
    }
    let tally = tally_products(results.iter().map(|(_, product)| product.as_ref()));
    tracing::info!(
        requested = results.len(),
        found = tally.found,
        without_nutrients = tally.without_nutrients,
        "product lookup finished"
    );
    Ok(())
}

pub(crate) async fn run_nutrients(config: &AppConfig, barcode: &str) -> anyhow::Result<()> {
    let client = OpenFoodFactsClient::from_config(config)?;

    match client.fetch_product(barcode).await {
        Ok(product) => {
            let empty = Nutriments::new();
            let report = NutrientsReport {
                barcode,
                name: product.product_name.as_deref(),
                nutriments: product.nutriments.as_ref().unwrap_or(&empty),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(error) => {
            tracing::warn!(barcode, %error, "error fetching product");
            println!("null");
        }
    }
    Ok(())
}

pub(crate) async fn run_lookup(config: &AppConfig, barcode: &str) -> anyhow::Result<()> {
    let lookup = ProductLookup::from_config(config)?;

    match lookup.lookup(barcode).await {
        Ok(summary) => {
            tracing::info!(barcode, source = %summary.source, "product found");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Err(error) => {
            tracing::warn!(barcode, %error, "product lookup failed");
            println!("null");
        }
    }
    Ok(())
}

use clap::Parser;
use foodscan_core::ExtractedProduct;

use super::*;
use crate::commands::{render_product_line, tally_products, ProductTally};

#[test]
fn parses_product_with_multiple_barcodes() {
    let cli = Cli::try_parse_from(["foodscan", "product", "3017620422003", "737628064502"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Product { ref barcodes } if barcodes == &["3017620422003", "737628064502"]
    ));
}

#[test]
fn product_requires_a_barcode() {
    assert!(Cli::try_parse_from(["foodscan", "product"]).is_err());
}

#[test]
fn parses_nutrients_command() {
    let cli = Cli::try_parse_from(["foodscan", "nutrients", "3017620422003"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Nutrients { ref barcode } if barcode == "3017620422003"
    ));
}

#[test]
fn parses_lookup_command() {
    let cli = Cli::try_parse_from(["foodscan", "lookup", "012993441012"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Lookup { ref barcode } if barcode == "012993441012"
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["foodscan"]).is_err());
}

#[test]
fn product_line_renders_null_for_missing_product() {
    let line = render_product_line("000", None).unwrap();
    assert_eq!(line, r#"{"barcode":"000","product":null}"#);
}

#[test]
fn product_line_renders_record() {
    let product = ExtractedProduct {
        name: Some("Nutella".to_string()),
        calories: Some(539.0),
        fat: None,
        sugar: Some(56.3),
        protein: Some(6.3),
    };
    let line = render_product_line("3017620422003", Some(&product)).unwrap();
    assert_eq!(
        line,
        r#"{"barcode":"3017620422003","product":{"name":"Nutella","calories":539.0,"fat":null,"sugar":56.3,"protein":6.3}}"#
    );
}

#[test]
fn tally_counts_found_and_nutrient_free_products() {
    let full = ExtractedProduct {
        name: Some("Nutella".to_string()),
        calories: Some(539.0),
        ..ExtractedProduct::default()
    };
    let name_only = ExtractedProduct {
        name: Some("Bottled Water".to_string()),
        ..ExtractedProduct::default()
    };
    let zero_fat = ExtractedProduct {
        fat: Some(0.0),
        ..ExtractedProduct::default()
    };

    let tally = tally_products([Some(&full), None, Some(&name_only), Some(&zero_fat), None]);

    assert_eq!(
        tally,
        ProductTally {
            found: 3,
            without_nutrients: 1,
        }
    );
}

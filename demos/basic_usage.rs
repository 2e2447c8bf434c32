//! Basic usage example for isocodes-rs
//!
//! This example demonstrates how to:
//! - Load the bundled catalogs
//! - Get records by a single field
//! - Look values up across identifying fields
//! - Run a fuzzy search

use isocodes_rs::prelude::*;

fn main() -> Result<(), IsoError> {
    println!("=== isocodes-rs Basic Usage Example ===\n");

    // Load the catalogs
    println!("Loading catalogs...");
    let catalogs = Catalogs::load()?;
    let stats = catalogs.stats();
    println!(
        "✓ {} countries, {} subdivisions, {} currencies\n",
        stats.countries, stats.subdivisions, stats.currencies
    );

    // Example 1: First few countries in catalog order
    println!("--- Example 1: List countries ---");
    let countries = catalogs.countries();
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {country}", i + 1);
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: Exact get on a unique field
    println!("--- Example 2: Get country by alpha_2 ---");
    if let Some(hit) = countries.get([("alpha_2", "GB")])? {
        let uk = hit.one().expect("alpha_2 is unique");
        println!("Found: {}", uk.name);
        println!("alpha_3: {}", uk.alpha_3);
        println!("Official name: {}", uk.official_name().unwrap_or("-"));
    }
    println!();

    // Example 3: Exact get on a multi-result field
    println!("--- Example 3: Currencies named 'Leone' ---");
    if let Some(hit) = catalogs.currencies().get([("name", "Leone")])? {
        for currency in hit.iter() {
            println!("- {currency}");
        }
    }
    println!();

    // Example 4: Lookup tries name, official name, alpha_3, alpha_2
    println!("--- Example 4: Lookup ---");
    for value in ["Brazil", "BRA", "br", "Brasil"] {
        match countries.lookup(value)? {
            Some(c) => println!("  {value:8} -> {}", c.name),
            None => println!("  {value:8} -> not found"),
        }
    }
    println!();

    // Example 5: Fuzzy search
    println!("--- Example 5: Search 'United' ---");
    for hit in countries.search("United")? {
        println!("  {:6.2}  {}", hit.score, hit.name);
    }
    println!("With cutoff 75:");
    for hit in countries.search_with_cutoff("United", 75.0)? {
        println!("  {:6.2}  {}", hit.score, hit.name);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

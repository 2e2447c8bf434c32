//! Error handling example for isocodes-rs
//!
//! This example demonstrates the difference between "not found" (a `None`)
//! and misuse (an `IsoError` with a distinct `ErrorKind`).

use isocodes_rs::prelude::*;

fn main() -> Result<(), IsoError> {
    println!("=== isocodes-rs Error Handling Example ===\n");

    // Example 1: Handling catalog load errors
    println!("--- Example 1: Loading catalogs with error handling ---");
    match Catalogs::load_from_dir("/does/not/exist") {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  ✗ {e} (kind: {:?})", e.kind()),
    }
    let catalogs = Catalogs::load()?;
    println!("  ✓ bundled catalogs loaded\n");

    let countries = catalogs.countries();

    // Example 2: Misses are not errors
    println!("--- Example 2: Values absent from the catalog ---");
    for code in ["XX", "", "ABCD"] {
        match countries.get([("alpha_2", code)])? {
            Some(hit) => println!("  Found: {}", hit.one().map_or("-", |c| c.name.as_str())),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 3: Misuse is an error, classified by kind
    println!("--- Example 3: Invalid queries ---");
    let attempts = [
        ("unknown field", countries.get([("capital", "Paris")]).err()),
        ("non-text value", countries.get([("numeric", 250)]).err()),
        (
            "two criteria",
            countries.get([("alpha_2", "FR"), ("alpha_3", "FRA")]).err(),
        ),
    ];
    for (label, err) in attempts {
        if let Some(err) = err {
            println!("  {label:15} -> {:?}: {err}", err.kind());
        }
    }
    println!();

    // Example 4: Defaults instead of Option
    println!("--- Example 4: Caller-supplied defaults ---");
    let fallback = countries
        .find(CountryField::Alpha2, "AQ")
        .expect("Antarctica is bundled");
    let hit = countries.lookup_or("Atlantis", fallback)?;
    println!("  lookup_or(\"Atlantis\") -> {}", hit.name);

    Ok(())
}

//! Cross-reference example for isocodes-rs
//!
//! Walks from a subdivision to its country, its parent chain and its
//! children.

use isocodes_rs::prelude::*;

fn main() -> Result<(), IsoError> {
    println!("=== isocodes-rs Cross References Example ===\n");

    let catalogs = Catalogs::load()?;
    let subs = catalogs.subdivisions();

    for code in ["FR-63", "FR-2A", "ES-B", "GB-BIR"] {
        let Some(sub) = subs.find(SubdivisionField::Code, code) else {
            println!("{code}: not in catalog\n");
            continue;
        };

        println!("{sub}");
        if let Some(country) = subs.country_of(sub) {
            println!("  country: {country}");
        }
        for parent in subs.ancestors(sub) {
            println!("  parent:  {parent}");
        }
        println!();
    }

    // Children of a region, in catalog order
    if let Some(ara) = subs.find(SubdivisionField::Code, "FR-ARA") {
        let children = subs.children_of(ara);
        println!("{} has {} departments:", ara.name, children.len());
        for child in children {
            println!("  - {} {}", child.code, child.name);
        }
    }
    println!();

    // All subdivisions of one country through a multi-result field
    if let Some(hit) = subs.get([("country_code", "ES")])? {
        println!("Spain: {} subdivisions in the bundled data", hit.len());
    }

    Ok(())
}

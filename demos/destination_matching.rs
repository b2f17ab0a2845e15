//! Destination matching example for portnav-rs
//!
//! This example walks through the country-inference and ranking behaviour
//! of the destination resolver.

use portnav_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== portnav-rs Destination Matching Example ===\n");

    let catalog = Catalog::bundled();

    // Example 1: the origin hint decides the country, not the query
    println!("--- Example 1: Same query, different origin hints ---");
    for hint in ["홍콩", "일본"] {
        let hits = catalog.find_destinations("크루즈 터미널", Some(hint));
        println!("hint {hint:?} → {} candidates", hits.len());
        for c in &hits {
            println!("  - {} [{}]", c.label, c.country.as_deref().unwrap_or("?"));
        }
    }
    println!();

    // Example 2: a country-only query takes the generic bypass
    println!("--- Example 2: Country-only query ---");
    for c in catalog.find_destinations("홍콩", None) {
        println!("- {} → {}", c.label, c.query);
    }
    println!();

    // Example 3: specific free text narrows to one terminal
    println!("--- Example 3: Specific terminal name ---");
    for c in catalog.find_destinations("카이탁", None) {
        println!("- {} → {}", c.label, c.query);
    }
    println!();

    // Example 4: the country can be inferred from an airport name
    println!("--- Example 4: Country inferred from place text ---");
    for text in ["하네다", "하네다국제공항 도쿄", "창이공항"] {
        match catalog.country_from_text(text) {
            Some(code) => println!("{text:?} → {code}"),
            None => println!("{text:?} → (no country)"),
        }
    }
    println!();

    // Example 5: no match degrades to an empty list, never an error
    println!("--- Example 5: Unmatched query ---");
    let hits = catalog.find_destinations("xyzzy unknown harbor", None);
    println!("candidates: {}", hits.len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}

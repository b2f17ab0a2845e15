//! Error handling example for portnav-rs
//!
//! This example demonstrates load-time validation and the total,
//! never-erroring behaviour of the resolvers.

use portnav_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== portnav-rs Error Handling Example ===\n");

    // Example 1: Handling catalog load errors explicitly
    println!("--- Example 1: Loading the catalog with error handling ---");
    match Catalog::load_bundled() {
        Ok(catalog) => {
            println!("✓ Catalog loaded successfully");
            println!("  Places: {}", catalog.places().len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load catalog: {e}");
            return Err(e);
        }
    }
    println!();

    let catalog = Catalog::bundled();

    // Example 2: Resolvers degrade to empty results, never errors
    println!("--- Example 2: Queries with no match ---");
    for query in ["", "   ", "zzz no such place", "🚢🚢🚢"] {
        let hits = catalog.find_destinations(query, Some("없는나라"));
        println!("  {:?} → {} candidates", query, hits.len());
    }
    println!();

    // Example 3: Country normalization returns None on no match
    println!("--- Example 3: Unrecognized countries ---");
    for text in ["아틀란티스", "XX", ""] {
        match catalog.normalize_country(text) {
            Some(code) => println!("  Found: {text:?} → {code}"),
            None => println!("  Not found: {text:?}"),
        }
    }
    println!();

    // Example 4: The nearby resolver always produces a phrase
    println!("--- Example 4: Nearby fallback ---");
    let phrase = catalog.resolve_category("completely unknown gibberish");
    println!("  fallback phrase: {phrase:?}");
    assert_eq!(phrase, DEFAULT_CATEGORY);

    // Example 5: A bad custom dataset is a load-time error
    println!("\n--- Example 5: Loading a missing dataset ---");
    match Catalog::load_places_from_path("/no/such/places.json") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}

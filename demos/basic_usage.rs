//! Basic usage example for portnav-rs
//!
//! This example demonstrates how to:
//! - Load the bundled catalog
//! - Resolve origin (airport) and destination (terminal) queries
//! - Resolve nearby-category phrases
//! - Build navigation URLs

use portnav_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== portnav-rs Basic Usage Example ===\n");

    // Load the catalog
    println!("Loading catalog...");
    let catalog = Catalog::bundled();
    println!("✓ Catalog loaded successfully\n");

    // Example 1: Catalog statistics
    println!("--- Example 1: Catalog statistics ---");
    let stats = catalog.stats();
    println!("Places: {}", stats.places);
    println!("Airports: {}", stats.airports);
    println!("Cruise terminals: {}", stats.cruise_terminals);
    println!("Countries: {}", stats.countries);
    println!();

    // Example 2: Country query → all of that country's airports
    println!("--- Example 2: Origins for a country query ---");
    for candidate in catalog.find_origins("일본") {
        println!("- {} → {}", candidate.label, candidate.query);
    }
    println!();

    // Example 3: Free-text origin query
    println!("--- Example 3: Origins for \"인천\" ---");
    for candidate in catalog.find_origins("인천") {
        println!("- {} → {}", candidate.label, candidate.query);
    }
    println!();

    // Example 4: Destination query with an origin hint
    println!("--- Example 4: Destinations for \"터미널\" anchored to 하네다 ---");
    for candidate in catalog.find_destinations("터미널", Some("하네다 공항")) {
        println!("- {} → {}", candidate.label, candidate.query);
    }
    println!();

    // Example 5: Supplementary "you might also mean" suggestions
    println!("--- Example 5: Related places for 일본 ---");
    let related = catalog.related_places(&RelatedQuery {
        country_hint: Some("일본"),
        limit: Some(6),
        ..Default::default()
    });
    for candidate in &related {
        println!("- {}", candidate.label);
    }
    println!();

    // Example 6: Nearby categories
    println!("--- Example 6: Nearby category phrases ---");
    for text in ["근처 맛집", "주변 카페", "스타벅스", "something unknown"] {
        println!("{:?} → {:?}", text, catalog.resolve_category(text));
    }
    println!();

    // Example 7: Navigation links
    println!("--- Example 7: Navigation links ---");
    let links = route_links("Haneda Airport", "Yokohama Osanbashi Pier");
    println!("Transit:  {}", links.transit);
    println!("Driving:  {}", links.driving);
    println!("Map view: {}", links.mapview);

    println!("\n=== Example completed successfully ===");
    Ok(())
}

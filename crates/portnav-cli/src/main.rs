//! portnav-cli — Command-line interface for portnav-core
//!
//! This binary provides a simple way to exercise the resolution engine from
//! your terminal: printing catalog statistics, resolving origin and
//! destination queries, listing related-place suggestions, mapping nearby
//! category phrases, and building navigation URLs.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ portnav stats
//!
//! - Resolve an origin query (country or free text)
//!   $ portnav origins 일본
//!   $ portnav origins 인천
//!
//! - Resolve a destination query, optionally anchored to an origin
//!   $ portnav destinations 홍콩
//!   $ portnav destinations 터미널 --from "하네다 공항"
//!
//! - Supplementary suggestions and nearby categories
//!   $ portnav related --country 일본 --limit 6
//!   $ portnav nearby "근처 맛집"
//!
//! - Navigation links
//!   $ portnav route "Haneda Airport" "Yokohama Osanbashi Pier"
//!
//! By default the CLI uses the catalog bundled with `portnav-core`. Use
//! `--input <path>` to point at a custom places JSON dataset; the country,
//! category and fallback tables stay bundled.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use portnav_core::{route_links, Candidate, Catalog, RelatedQuery};

fn print_candidates(candidates: &[Candidate]) {
    if candidates.is_empty() {
        println!("No matches.");
        return;
    }
    for c in candidates {
        match &c.country {
            Some(code) => println!("{} [{}] — {} ({})", c.label, code, c.query, c.id),
            None => println!("{} — {} ({})", c.label, c.query, c.id),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Load the catalog once up front; every resolver below borrows it.
    let owned;
    let catalog: &Catalog = match &args.input {
        Some(path) => {
            owned = Catalog::load_places_from_path(path)?;
            &owned
        }
        None => Catalog::bundled(),
    };

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Places: {}", stats.places);
            println!("  Airports: {}", stats.airports);
            println!("  Cruise terminals: {}", stats.cruise_terminals);
            println!("  Countries: {}", stats.countries);
            println!("  Nearby categories: {}", stats.categories);
        }

        Commands::Origins { query } => {
            print_candidates(&catalog.find_origins(&query));
        }

        Commands::Destinations { query, origin_hint } => {
            print_candidates(&catalog.find_destinations(&query, origin_hint.as_deref()));
        }

        Commands::Related {
            query,
            country,
            city,
            limit,
        } => {
            let related = catalog.related_places(&RelatedQuery {
                country_hint: country.as_deref(),
                city_hint: city.as_deref(),
                text: query.as_deref(),
                limit,
            });
            print_candidates(&related);
        }

        Commands::Nearby { text } => {
            println!("{}", catalog.resolve_category(&text));
        }

        Commands::Route { from, to } => {
            let links = route_links(&from, &to);
            println!("Transit:  {}", links.transit);
            println!("Driving:  {}", links.driving);
            println!("Map view: {}", links.mapview);
        }
    }

    Ok(())
}

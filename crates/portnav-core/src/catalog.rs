// crates/portnav-core/src/catalog.rs

//! # Catalog
//!
//! The process-wide, immutable table of places plus the static lookup
//! tables (countries, categories, fallback ports). Loaded and validated
//! once, read-only thereafter — this subsystem has no write path.

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::common::CatalogStats;
use crate::country::{CountryEntry, CountryTable};
use crate::error::{CatalogError, Result};
use crate::model::Place;
use crate::nearby::{CategoryEntry, CategoryTable};

const PLACES_JSON: &str = include_str!("../data/places.json");
const COUNTRIES_JSON: &str = include_str!("../data/countries.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const FALLBACK_PORTS_JSON: &str = include_str!("../data/fallback_ports.json");

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// A representative port in the static country→ports backfill table.
///
/// These are not catalog rows; when surfaced they carry a synthetic
/// `fallback-` id so they can never collide with a real place id.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackPort {
    pub label: String,
    pub value: String,
}

/// The immutable in-memory catalog.
///
/// Constructed explicitly (usually via [`Catalog::bundled`]) and passed by
/// shared reference into every resolver; concurrent unsynchronized reads
/// are safe by construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    countries: CountryTable,
    categories: CategoryTable,
    fallback_ports: BTreeMap<String, Vec<FallbackPort>>,
}

impl Catalog {
    /// Assemble a catalog from its four parts, validating the cross-table
    /// invariants:
    ///
    /// - every place has a non-empty name and a unique id
    /// - every place/fallback country code resolves in the country table
    pub fn new(
        places: Vec<Place>,
        countries: CountryTable,
        categories: CategoryTable,
        fallback_ports: BTreeMap<String, Vec<FallbackPort>>,
    ) -> Result<Self> {
        let mut ids = HashSet::new();
        for place in &places {
            if place.name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "place {:?} has an empty name",
                    place.id
                )));
            }
            if !ids.insert(place.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate place id {:?}",
                    place.id
                )));
            }
            if !countries.contains_code(&place.country) {
                return Err(CatalogError::Invalid(format!(
                    "place {:?} has unknown country code {:?}",
                    place.id, place.country
                )));
            }
        }

        for (code, ports) in &fallback_ports {
            if !countries.contains_code(code) {
                return Err(CatalogError::Invalid(format!(
                    "fallback table has unknown country code {code:?}"
                )));
            }
            for port in ports {
                if port.label.trim().is_empty() || port.value.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "fallback port under {code:?} has an empty label or value"
                    )));
                }
            }
        }

        debug!(
            "catalog loaded: {} places, {} countries, {} categories",
            places.len(),
            countries.len(),
            categories.len()
        );

        Ok(Catalog {
            places,
            countries,
            categories,
            fallback_ports,
        })
    }

    /// Parse and validate the datasets bundled with the crate.
    pub fn load_bundled() -> Result<Self> {
        let places: Vec<Place> = serde_json::from_str(PLACES_JSON)?;
        Self::with_bundled_tables(places)
    }

    /// Load a custom places dataset from disk, keeping the bundled country,
    /// category and fallback tables.
    pub fn load_places_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CatalogError::NotFound(format!("{}: {}", path.display(), e))
        })?;
        let places: Vec<Place> = serde_json::from_reader(BufReader::new(file))?;
        Self::with_bundled_tables(places)
    }

    fn with_bundled_tables(places: Vec<Place>) -> Result<Self> {
        let countries: Vec<CountryEntry> = serde_json::from_str(COUNTRIES_JSON)?;
        let categories: Vec<CategoryEntry> = serde_json::from_str(CATEGORIES_JSON)?;
        let fallback: BTreeMap<String, Vec<FallbackPort>> =
            serde_json::from_str(FALLBACK_PORTS_JSON)?;

        Self::new(
            places,
            CountryTable::from_entries(countries)?,
            CategoryTable::from_entries(categories)?,
            fallback,
        )
    }

    /// The process-wide bundled catalog.
    ///
    /// Loaded on first access and cached for the process lifetime. A broken
    /// bundled dataset is a build defect, not a runtime condition, so this
    /// fails fast instead of surfacing a per-call error.
    pub fn bundled() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            Catalog::load_bundled().expect("bundled catalog datasets must parse and validate")
        })
    }

    /// All places, in catalog order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// See [`CountryTable::normalize`].
    pub fn normalize_country(&self, text: &str) -> Option<&str> {
        self.countries.normalize(text)
    }

    /// See [`CategoryTable::resolve`].
    pub fn resolve_category(&self, text: &str) -> &str {
        self.categories.resolve(text)
    }

    pub(crate) fn fallback_ports_for(&self, code: &str) -> &[FallbackPort] {
        self.fallback_ports
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            places: self.places.len(),
            airports: self.places.iter().filter(|p| p.is_airport()).count(),
            cruise_terminals: self
                .places
                .iter()
                .filter(|p| p.is_cruise_terminal())
                .count(),
            countries: self.countries.len(),
            categories: self.categories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (CountryTable, CategoryTable) {
        let countries = CountryTable::from_entries(vec![CountryEntry {
            code: "JP".into(),
            name: "Japan".into(),
            name_ko: "일본".into(),
            aliases: vec![],
        }])
        .unwrap();
        let categories = CategoryTable::from_entries(vec![CategoryEntry {
            label: "카페".into(),
            keywords: vec!["cafe".into()],
        }])
        .unwrap();
        (countries, categories)
    }

    fn place(id: &str, name: &str, country: &str) -> Place {
        Place {
            id: id.into(),
            name: name.into(),
            name_ko: None,
            keywords_ko: Vec::new(),
            city: None,
            country: country.into(),
        }
    }

    #[test]
    fn bundled_catalog_loads_and_validates() {
        let catalog = Catalog::load_bundled().unwrap();
        let stats = catalog.stats();
        assert!(stats.places > 0);
        assert!(stats.airports > 0);
        assert!(stats.cruise_terminals > 0);
        assert!(stats.countries > 0);
        assert!(stats.categories > 0);
    }

    #[test]
    fn every_bundled_place_country_resolves() {
        let catalog = Catalog::load_bundled().unwrap();
        for place in catalog.places() {
            assert!(
                catalog.countries().contains_code(&place.country),
                "place {} carries unresolvable country {}",
                place.id,
                place.country
            );
        }
    }

    #[test]
    fn rejects_unknown_country_code() {
        let (countries, categories) = tables();
        let err = Catalog::new(
            vec![place("x_airport", "X Airport", "ZZ")],
            countries,
            categories,
            BTreeMap::new(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn rejects_duplicate_ids_and_empty_names() {
        let (countries, categories) = tables();
        assert!(Catalog::new(
            vec![
                place("hnd_airport", "Haneda Airport", "JP"),
                place("hnd_airport", "Haneda Airport", "JP"),
            ],
            countries.clone(),
            categories.clone(),
            BTreeMap::new(),
        )
        .is_err());

        assert!(Catalog::new(
            vec![place("blank", "   ", "JP")],
            countries,
            categories,
            BTreeMap::new(),
        )
        .is_err());
    }

    #[test]
    fn bundled_is_cached() {
        let a = Catalog::bundled() as *const Catalog;
        let b = Catalog::bundled() as *const Catalog;
        assert_eq!(a, b);
    }
}

// crates/portnav-core/src/lib.rs

//! # portnav-core
//!
//! Free-text destination/origin resolution over a static catalog of
//! airports and cruise ports/terminals: given a short, noisy, mixed-language
//! utterance (a country, an airport, a port nickname, or a generic phrase
//! like "크루즈 터미널"), find the most plausible matching places, rank them
//! by specificity, and build ready-to-use navigation links.
//!
//! The catalog is bundled, loaded once and immutable; every resolver is a
//! pure function over it and is total over all string inputs — "no match"
//! is an empty result, never an error.
//!
//! ```
//! use portnav_core::Catalog;
//!
//! let catalog = Catalog::bundled();
//! let ports = catalog.find_destinations("홍콩", None);
//! assert!(ports.iter().any(|c| c.query == "Kai Tak Cruise Terminal"));
//! ```

pub mod catalog;
pub mod common;
pub mod country;
pub mod error;
pub mod links;
pub mod model;
pub mod nearby;
pub mod related;
pub mod search;
pub mod text;

// Re-exports
pub use crate::catalog::{Catalog, FallbackPort};
pub use crate::common::CatalogStats;
pub use crate::country::{CountryEntry, CountryTable};
pub use crate::error::{CatalogError, Result};
pub use crate::links::{directions_url, route_links, search_url, RouteLinks, TravelMode};
pub use crate::model::{Candidate, Place};
pub use crate::nearby::{CategoryEntry, CategoryTable, DEFAULT_CATEGORY};
pub use crate::related::{RelatedQuery, DEFAULT_RELATED_LIMIT};
pub use crate::search::{GENERIC_PORT_TERMS, MAX_DESTINATIONS, MAX_ORIGINS};

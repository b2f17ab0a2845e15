//! portnav-rs — workspace facade crate.
//!
//! Re-exports [`portnav_core`] so the demos and downstream consumers can use
//! a single dependency. See `crates/portnav-core` for the actual engine.

pub use portnav_core::*;

/// Convenient glob-import surface for the demos.
pub mod prelude {
    pub use portnav_core::{
        route_links, search_url, Candidate, Catalog, CatalogError, CatalogStats, Place,
        RelatedQuery, Result, RouteLinks, TravelMode, DEFAULT_CATEGORY,
    };
}

// crates/portnav-core/src/common.rs

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`crate::Catalog::stats`]; the counts reflect the
/// materialized in-memory catalog after load-time validation.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatalogStats {
    pub places: usize,
    pub airports: usize,
    pub cruise_terminals: usize,
    pub countries: usize,
    pub categories: usize,
}

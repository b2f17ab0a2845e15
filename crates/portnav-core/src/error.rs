// crates/portnav-core/src/error.rs

use thiserror::Error;

/// Errors raised while loading or validating catalog data.
///
/// Resolvers themselves are total over string inputs and never return an
/// error; "no match" is an empty result. Everything here can only surface
/// at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog data: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

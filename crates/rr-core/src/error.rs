//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `RrError` as one variant
//! where a core precondition can fail underneath them.

use thiserror::Error;

/// The base error type for `rr-core` and the precondition failures shared by
/// the other crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RrError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid route: path has {points} point(s), at least 2 are required")]
    InvalidRoute { points: usize },

    #[error("invalid comfort score {0}: must be a finite number")]
    InvalidScore(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rr-*` crates.
pub type RrResult<T> = Result<T, RrError>;

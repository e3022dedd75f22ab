//! Error types for the scholarmap engine.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScholarMapError>;

/// Errors the engine can return to callers.
///
/// The resolve/reconcile path is infallible by design; malformed regions
/// and invalid configuration values are programmer errors and panic
/// instead of surfacing here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScholarMapError {
    /// A batch name was activated before any points were loaded for it.
    #[error("unknown batch: {0}")]
    UnknownBatch(String),
}

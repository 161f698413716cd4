//! Shared error type across gaugelink crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, GaugeLinkError>;

/// Unified error type used by core and the reporting side.
///
/// The gauge read path itself is infallible: non-numeric metric values are
/// normalized to `0.0` rather than surfaced as errors. Everything here
/// belongs to the registration surface.
#[derive(Debug, Error)]
pub enum GaugeLinkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("gauge already registered: {0}")]
    AlreadyRegistered(String),
}

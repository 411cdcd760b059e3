//! Error types for the robofleet library.
//!
//! The taxonomy is deliberately small: storage that cannot be read or
//! written, fleet data that cannot be decoded, and configuration that
//! cannot be parsed. "Not found" style conditions (unknown robot, no free
//! robot of a kind) are not errors; they are reported through
//! [`crate::fleet::ReserveOutcome`] so commands can print a message and
//! exit normally.

use thiserror::Error;

/// Result type alias for operations that may fail with a robofleet error.
///
/// # Examples
///
/// ```
/// use robofleet::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the robofleet library.
#[derive(Debug, Error)]
pub enum Error {
    /// The storage file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The fleet data is malformed (inconsistent column counts,
    /// non-numeric time cells, bad encoding).
    #[error("malformed fleet data: {0}")]
    Format(#[from] csv::Error),

    /// A configuration file exists but could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Serializing the fleet to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check whether this error came from the storage layer.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check whether this error came from decoding fleet data.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

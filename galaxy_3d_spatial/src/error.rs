//! Error types for the Galaxy3D spatial index
//!
//! Only construction-time and configuration failures are errors.
//! Benign no-ops (out-of-bounds insert, double insert, erase of an
//! absent element) are reported through boolean return values.

use std::fmt;

/// Result type for spatial index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Spatial index errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Root volume rejected (degenerate, non-finite or not a cube)
    InvalidBounds(String),

    /// `reserve()` requested on an octree with auto-collapse enabled
    ReserveWithAutoCollapse,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            Error::ReserveWithAutoCollapse => {
                write!(f, "Cannot reserve sectors while auto-collapse is enabled")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

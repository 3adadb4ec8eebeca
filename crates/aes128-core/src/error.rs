//! Errors raised while validating caller input.

use thiserror::Error;

/// Boundary validation failures. Once input passes validation the cipher
/// itself cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A key or block did not have the required number of bytes.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which input was rejected.
        what: &'static str,
        /// Required length.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
    /// A cell value did not fit in a byte.
    #[error("value {value} at index {index} is outside 0..=255")]
    DomainViolation {
        /// Position of the offending cell.
        index: usize,
        /// Rejected value.
        value: u32,
    },
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            what,
            expected,
            actual,
        })
    }
}

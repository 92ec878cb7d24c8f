//! Error type shared by every collection of the crate.
//!
//! Reading from an empty collection is not an error: `peek`, `poll`, `pop`
//! and friends return `None`. `Error` is reserved for arguments the callee
//! cannot act on.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Positional access past the live range of a collection.
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// Load factor that is zero, negative, infinite or NaN.
    InvalidLoadFactor(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            }
            Error::InvalidLoadFactor(value) => write!(f, "illegal load factor: {}", value),
        }
    }
}

impl std::error::Error for Error {}

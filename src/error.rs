//! Error type shared by all fallible buffer operations.
//!
//! Every operation that can fail reports its failure by returning an
//! [`Error`] to the immediate caller; the library performs no logging,
//! retries, or recovery of its own. No failure is fatal: a buffer whose
//! reallocation failed remains fully usable at its previous capacity.

use core::fmt;

/// Errors returned by operations on a [`GrowBuf`](crate::GrowBuf).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The requested initial capacity was zero.
    InvalidCapacity,
    /// The element type has a size of zero bytes.
    ZeroSizedElement,
    /// The growth factor is not a finite number greater than or equal to 1.0.
    InvalidGrowthFactor,
    /// Memory could not be allocated, or the requested allocation size
    /// does not fit in `isize`.
    OutOfMemory,
    /// The index exceeds the applicable bound: the capacity for
    /// [`set`](crate::GrowBuf::set), the length for removal.
    IndexOutOfBounds,
    /// The operation would push the buffer's length past the range of
    /// its index type `I`.
    IndexOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity => f.write_str("initial capacity is invalid"),
            Error::ZeroSizedElement => f.write_str("element type has zero size"),
            Error::InvalidGrowthFactor => f.write_str("growth factor is invalid"),
            Error::OutOfMemory => f.write_str("could not allocate additional memory"),
            Error::IndexOutOfBounds => f.write_str("index exceeds the buffer's bounds"),
            Error::IndexOverflow => f.write_str("length exceeds the range of the index type"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::ToString;

    #[test]
    fn display_strings() {
        assert_eq!(
            Error::OutOfMemory.to_string(),
            "could not allocate additional memory"
        );
        assert_eq!(
            Error::IndexOutOfBounds.to_string(),
            "index exceeds the buffer's bounds"
        );
        assert_eq!(Error::InvalidCapacity.to_string(), "initial capacity is invalid");
        assert_eq!(
            Error::IndexOverflow.to_string(),
            "length exceeds the range of the index type"
        );
    }

    #[test]
    fn usable_as_error_object() {
        fn describe(e: &dyn core::error::Error) -> std::string::String {
            e.to_string()
        }

        assert_eq!(
            describe(&Error::InvalidGrowthFactor),
            "growth factor is invalid"
        );
    }
}

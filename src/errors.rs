//! Submodule defining the errors used across the crate.

/// Errors that can occur while encoding or decoding a VLQ.
///
/// Every variant is a capacity problem: the value domain has no invalid
/// inputs, so the only thing that can go wrong is a buffer that is too small
/// for what the caller asked of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The destination buffer cannot hold the bytes the operation must write.
    #[error("{required} free bytes required to encode, but only {available} available")]
    InsufficientCapacity {
        /// Number of bytes the operation needs.
        required: usize,
        /// Number of bytes the caller supplied.
        available: usize,
    },

    /// A reversed decode scanned the whole buffer without finding the
    /// terminal byte of the value.
    #[error("Buffer of {scanned} bytes does not contain a complete reversed VLQ value")]
    UnterminatedReversed {
        /// Number of bytes scanned before giving up.
        scanned: usize,
    },
}

impl Error {
    /// Number of bytes the failed operation required, if known.
    #[must_use]
    pub fn required(&self) -> Option<usize> {
        match self {
            Error::InsufficientCapacity { required, .. } => Some(*required),
            Error::UnterminatedReversed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        extern crate std;
        use std::string::ToString;

        let err = Error::UnterminatedReversed { scanned: 4 };
        assert_eq!(
            err.to_string(),
            "Buffer of 4 bytes does not contain a complete reversed VLQ value"
        );
    }

    #[test]
    fn test_required() {
        let err = Error::InsufficientCapacity {
            required: 10,
            available: 2,
        };
        assert_eq!(err.required(), Some(10));
        assert_eq!(Error::UnterminatedReversed { scanned: 0 }.required(), None);
    }
}

//! Error types for lanerand.

use thiserror::Error;

/// Result type alias using lanerand's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Construction-time failures. Stepping a generator never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operating system entropy source could not be read.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),

    /// The entropy source kept returning an all-zero lane state.
    #[error("entropy source returned an all-zero state for lane {lane} after {attempts} attempts")]
    ZeroEntropy {
        /// Lane being seeded
        lane: usize,
        /// Number of draws attempted for that lane
        attempts: usize,
    },
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_display_entropy() {
        let err = Error::from(getrandom::Error::UNSUPPORTED);
        assert!(format!("{}", err).starts_with("entropy source failed: "));
    }

    #[test]
    fn test_display_zero_entropy() {
        let err = Error::ZeroEntropy { lane: 3, attempts: 16 };
        assert_eq!(
            format!("{}", err),
            "entropy source returned an all-zero state for lane 3 after 16 attempts"
        );
    }

    #[test]
    fn test_entropy_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::Entropy(getrandom::Error::UNSUPPORTED);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            Error::ZeroEntropy { lane: 0, attempts: 1 },
            Error::ZeroEntropy { lane: 0, attempts: 1 }
        );
        assert_ne!(
            Error::ZeroEntropy { lane: 0, attempts: 1 },
            Error::Entropy(getrandom::Error::UNSUPPORTED)
        );
    }
}

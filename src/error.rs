//! Error types for the S-DES library.

use std::fmt;

/// Errors produced by the S-DES library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdesError {
    /// A bit vector does not have the length its context requires
    /// (8 bits for blocks, 10 bits for keys).
    InvalidLength {
        /// Length the context requires.
        expected: usize,
        /// Length that was actually supplied.
        actual: usize,
    },
    /// A bit string contains a character other than `'0'` or `'1'`.
    InvalidCharacter {
        /// Zero-based character index of the offending character.
        position: usize,
    },
    /// Brute-force worker count is outside the valid range [1, 1024].
    InvalidWorkerCount,
}

impl fmt::Display for SdesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdesError::InvalidLength { expected, actual } => {
                write!(
                    f,
                    "Bit vector must be {} bits long, got {}",
                    expected, actual
                )
            }
            SdesError::InvalidCharacter { position } => {
                write!(
                    f,
                    "Bit string contains a non-binary character at position {}",
                    position
                )
            }
            SdesError::InvalidWorkerCount => {
                write!(f, "Worker count must be between 1 and 1024")
            }
        }
    }
}

impl std::error::Error for SdesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_length() {
        let err = SdesError::InvalidLength {
            expected: 8,
            actual: 7,
        };
        assert_eq!(format!("{}", err), "Bit vector must be 8 bits long, got 7");
    }

    #[test]
    fn test_display_invalid_character() {
        let err = SdesError::InvalidCharacter { position: 3 };
        assert_eq!(
            format!("{}", err),
            "Bit string contains a non-binary character at position 3"
        );
    }

    #[test]
    fn test_display_invalid_worker_count() {
        let err = SdesError::InvalidWorkerCount;
        assert_eq!(format!("{}", err), "Worker count must be between 1 and 1024");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            SdesError::InvalidLength {
                expected: 10,
                actual: 9
            },
            SdesError::InvalidLength {
                expected: 10,
                actual: 9
            }
        );
        assert_ne!(
            SdesError::InvalidLength {
                expected: 10,
                actual: 9
            },
            SdesError::InvalidWorkerCount
        );
    }

    #[test]
    fn test_error_clone() {
        let err = SdesError::InvalidCharacter { position: 0 };
        let cloned = err;
        assert_eq!(err, cloned);
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &SdesError::InvalidWorkerCount;
        assert!(err.source().is_none());
    }
}

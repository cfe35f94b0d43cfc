//! Error handling for the qcrypt ecosystem

use core::fmt;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Context in which the key was rejected
        context: &'static str,
        /// Reason why the key is invalid
        reason: &'static str,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        /// Context in which the ciphertext was rejected
        context: &'static str,
        /// Reason why the ciphertext is invalid
        reason: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation that received the wrong-length input
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Other error
    Other {
        /// Context in which the error occurred
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { reason, .. } => Self::InvalidKey { context, reason },
            Self::InvalidCiphertext { reason, .. } => Self::InvalidCiphertext { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::Other { .. } => Self::Other { context },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, reason } => {
                write!(f, "Invalid key in {}: {}", context, reason)
            }
            Error::InvalidCiphertext { context, reason } => {
                write!(f, "Invalid ciphertext in {}: {}", context, reason)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidParameter { context, reason } => {
                write!(f, "Invalid parameter in {}: {}", context, reason)
            }
            Error::Other { context } => write!(f, "Error in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

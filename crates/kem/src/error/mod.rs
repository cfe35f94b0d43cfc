//! Error handling for KEM operations

use core::fmt;

use qcrypt_algorithms::error::Error as PrimitiveError;
use qcrypt_api::Error as CoreError;

/// Error type for KEM operations
///
/// `MalformedInput` is the only input-validation error the core reports: a
/// byte buffer handed to an unpack routine whose length does not equal the
/// parameter set's declared size. Everything else in the scheme is a total
/// function; in particular a failed re-encryption check during decapsulation
/// is answered with the implicit-rejection secret, never with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Arithmetic-layer error
    Primitive(PrimitiveError),

    /// Wrong-length byte buffer supplied to an unpack routine
    MalformedInput {
        /// Input that failed validation
        context: &'static str,
        /// Declared size for the active parameter set
        expected: usize,
        /// Size of the supplied buffer
        actual: usize,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::MalformedInput {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Malformed {}: expected {} bytes, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::MalformedInput {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

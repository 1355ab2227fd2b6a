//! Error handling for PKE operations.

use core::fmt;
use latcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure raised by the ring or matrix algebra
    Algebra(CoreError),
    /// Parameters that cannot describe a scheme instance
    InvalidParameters(&'static str),
    /// Message does not hold exactly one bit per ring coefficient
    InvalidMessageLength { expected: usize, actual: usize },
    /// Message entry other than 0 or 1
    InvalidMessageBit { index: usize, value: u8 },
    /// Key components with the wrong shape for the parameters
    InvalidKey(&'static str),
    /// Ciphertext components with the wrong shape
    InvalidCiphertextFormat(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Algebra(e) => write!(f, "PKE algebra error: {}", e),
            Error::InvalidParameters(reason) => write!(f, "Invalid PKE parameters: {}", reason),
            Error::InvalidMessageLength { expected, actual } => write!(
                f,
                "Invalid PKE message length: expected {} bits, got {}",
                expected, actual
            ),
            Error::InvalidMessageBit { index, value } => write!(
                f,
                "Invalid PKE message bit at index {}: {} is not 0 or 1",
                index, value
            ),
            Error::InvalidKey(reason) => write!(f, "Invalid PKE key: {}", reason),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid PKE ciphertext format: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Algebra(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Algebra(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Algebra(e) => e,
            Error::InvalidParameters(reason) => CoreError::construction("PKE parameters", reason),
            Error::InvalidMessageLength { expected, actual } => CoreError::DimensionMismatch {
                context: "PKE message",
                expected,
                actual,
            },
            Error::InvalidMessageBit { index, value } => CoreError::construction(
                "PKE message",
                format!("bit {} has value {}, expected 0 or 1", index, value),
            ),
            Error::InvalidKey(reason) => CoreError::type_mismatch("PKE key", reason),
            Error::InvalidCiphertextFormat(reason) => {
                CoreError::type_mismatch("PKE ciphertext", reason)
            }
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;

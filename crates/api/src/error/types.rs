//! Error type definitions for lattice operations

use thiserror::Error as ThisError;

use crate::types::RingId;

/// Primary error type for lattice operations.
///
/// Every check in the algebra fails immediately with one of these variants;
/// there is no retry and no silent coercion.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A value could not be built: bad modulus, empty sequence, zero dimension
    #[error("invalid construction of {context}: {message}")]
    Construction {
        context: &'static str,
        message: String,
    },

    /// Operand shapes or lengths are incompatible
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Operands have compatible shapes but live in different rings
    #[error("ring mismatch in {context}: expected {expected}, got {actual}")]
    RingMismatch {
        context: &'static str,
        expected: RingId,
        actual: RingId,
    },

    /// A value has the wrong form for the place it is used
    #[error("type mismatch in {context}: {message}")]
    TypeMismatch {
        context: &'static str,
        message: String,
    },

    /// Coefficient or cell lookup outside the valid range
    #[error("index {index} out of range for {context} of length {len}")]
    IndexOutOfRange {
        context: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type for lattice operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Construction error
    pub fn construction(context: &'static str, message: impl Into<String>) -> Self {
        Error::Construction {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a TypeMismatch error
    pub fn type_mismatch(context: &'static str, message: impl Into<String>) -> Self {
        Error::TypeMismatch {
            context,
            message: message.into(),
        }
    }

    /// The context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Error::Construction { context, .. }
            | Error::DimensionMismatch { context, .. }
            | Error::RingMismatch { context, .. }
            | Error::TypeMismatch { context, .. }
            | Error::IndexOutOfRange { context, .. } => context,
        }
    }
}

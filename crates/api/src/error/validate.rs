//! Validation utilities for lattice values

use super::{Error, Result};
use crate::types::{RingId, MAX_MODULUS};

/// Validate a coefficient modulus
#[inline(always)]
pub fn modulus(context: &'static str, q: i64) -> Result<()> {
    if q < 2 {
        return Err(Error::construction(context, format!("modulus must be > 1, got {}", q)));
    }
    if q > MAX_MODULUS {
        return Err(Error::construction(
            context,
            format!("modulus must be <= 2^62, got {}", q),
        ));
    }
    Ok(())
}

/// Validate a construction condition
#[inline(always)]
pub fn construction(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::construction(context, message));
    }
    Ok(())
}

/// Validate a dimension
#[inline(always)]
pub fn dimension(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::DimensionMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that two values live in the same ring
#[inline(always)]
pub fn same_ring(context: &'static str, expected: RingId, actual: RingId) -> Result<()> {
    if expected != actual {
        return Err(Error::RingMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an index against a length
#[inline(always)]
pub fn index(context: &'static str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::IndexOutOfRange {
            context,
            index,
            len,
        });
    }
    Ok(())
}

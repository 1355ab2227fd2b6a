//! Core types shared across the latcrypt crates

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported coefficient modulus.
///
/// Representatives of Z_q are stored in an `i64`; keeping `q <= 2^62` means the
/// sum or difference of two representatives can never overflow.
pub const MAX_MODULUS: i64 = 1 << 62;

/// Identity of the ring Z_q[x]/(x^n + 1).
///
/// Two values can only be combined when their `RingId`s are equal. A ring of
/// degree one is Z_q itself, so scalars use `n == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingId {
    /// Coefficient modulus
    pub q: i64,
    /// Ring degree
    pub n: usize,
}

impl RingId {
    /// The ring Z_q[x]/(x^n + 1)
    pub const fn new(q: i64, n: usize) -> Self {
        Self { q, n }
    }

    /// The scalar ring Z_q
    pub const fn scalar(q: i64) -> Self {
        Self { q, n: 1 }
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 1 {
            write!(f, "Z_{}", self.q)
        } else {
            write!(f, "Z_{}[x]/(x^{}+1)", self.q, self.n)
        }
    }
}

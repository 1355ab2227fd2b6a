//! Constants for the Kyber-style module-lattice encryption scheme

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: i64 = 3329;

/// Parameters of a module-lattice encryption instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params {
    /// Module rank (number of polynomials in the secret vector)
    pub k: usize,

    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: i64,

    /// Noise width for the secret s and the encryption randomness r
    pub eta1: u8,

    /// Noise width for the errors e, e1 and e2
    pub eta2: u8,

    /// Compression bits for u; reserved, not consumed by the core
    pub du: usize,

    /// Compression bits for v; reserved, not consumed by the core
    pub dv: usize,
}

impl Params {
    /// Build a parameter record
    pub const fn new(k: usize, n: usize, q: i64, eta1: u8, eta2: u8, du: usize, dv: usize) -> Self {
        Self { k, n, q, eta1, eta2, du, dv }
    }

    /// The same parameters with both noise widths replaced
    pub const fn with_noise(self, eta1: u8, eta2: u8) -> Self {
        Self { eta1, eta2, ..self }
    }
}

/// Kyber-512 parameters
pub const KYBER512: Params = Params::new(2, KYBER_N, KYBER_Q, 3, 2, 10, 4);

/// Kyber-768 parameters
pub const KYBER768: Params = Params::new(3, KYBER_N, KYBER_Q, 2, 2, 10, 4);

/// Kyber-1024 parameters
pub const KYBER1024: Params = Params::new(4, KYBER_N, KYBER_Q, 2, 2, 11, 5);

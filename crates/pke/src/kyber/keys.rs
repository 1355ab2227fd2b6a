// pke/src/kyber/keys.rs

//! Key and ciphertext containers.

use core::fmt;

use latcrypt_algorithms::RingMatrix;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public key: the uniform matrix A (k × k) and t = A·s + e (k × 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    /// Public matrix A
    pub a: RingMatrix,
    /// Public vector t
    pub t: RingMatrix,
}

/// Secret key: the short vector s (k × 1). Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    s: RingMatrix,
}

impl SecretKey {
    /// Wraps a secret vector
    pub fn new(s: RingMatrix) -> Self {
        Self { s }
    }

    /// The secret vector s
    pub fn as_matrix(&self) -> &RingMatrix {
        &self.s
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("shape", &self.s.shape())
            .field("ring", &self.s.ring())
            .finish_non_exhaustive()
    }
}

/// Ciphertext: u (k × 1) and v (1 × 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    /// Masked randomness Aᵀ·r + e1
    pub u: RingMatrix,
    /// Masked message tᵀ·r + e2 + m
    pub v: RingMatrix,
}

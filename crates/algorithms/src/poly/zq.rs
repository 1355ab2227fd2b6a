//! zq.rs - Elements of the finite ring Z_q

use core::fmt;

use latcrypt_api::error::{validate, Result};
use latcrypt_api::RingId;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::sampling;

/// An element of Z_q.
///
/// The value is kept in one of two representations: canonical, in `[0, q)`,
/// or symmetric, centered on zero (used for secrets and noise). Arithmetic
/// always produces the canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
pub struct ModularInteger {
    q: i64,
    value: i64,
}

impl ModularInteger {
    /// Creates `value mod q` in canonical form.
    ///
    /// Reduction is the mathematical modulo, so negative inputs land in
    /// `[0, q)` rather than being truncated toward zero.
    pub fn new(q: i64, value: i64) -> Result<Self> {
        validate::modulus("ModularInteger", q)?;
        Ok(Self {
            q,
            value: value.rem_euclid(q),
        })
    }

    /// Re-reduces another element under the modulus `q`.
    pub fn from_modular(q: i64, other: ModularInteger) -> Result<Self> {
        Self::new(q, other.value)
    }

    /// The representative currently held
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The modulus
    pub fn q(&self) -> i64 {
        self.q
    }

    /// The ring this element lives in
    pub fn ring(&self) -> RingId {
        RingId::scalar(self.q)
    }

    /// Draws an element uniformly from `[0, q)`.
    pub fn uniform<R: RngCore + CryptoRng>(q: i64, rng: &mut R) -> Result<Self> {
        validate::modulus("ModularInteger::uniform", q)?;
        Self::new(q, sampling::uniform(rng, q))
    }

    /// Draws from CBD(eta) and returns it in symmetric form.
    pub fn centered_binomial<R: RngCore + CryptoRng>(q: i64, eta: u8, rng: &mut R) -> Result<Self> {
        let sample = sampling::centered_binomial(rng, eta);
        Ok(Self::new(q, sample)?.to_symmetric())
    }

    /// Sum modulo q
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_ring("ModularInteger::add", other)?;
        Self::new(self.q, self.value + other.value)
    }

    /// Difference modulo q
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_ring("ModularInteger::sub", other)?;
        Self::new(self.q, self.value - other.value)
    }

    /// Product modulo q
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_ring("ModularInteger::mul", other)?;
        let prod = (self.value as i128 * other.value as i128).rem_euclid(self.q as i128);
        Ok(Self {
            q: self.q,
            value: prod as i64,
        })
    }

    /// Converts to the symmetric representative.
    ///
    /// For even q, values `>= q/2` move down by q; for odd q, values
    /// `> q/2` do. Applying it twice changes nothing.
    pub fn to_symmetric(self) -> Self {
        let half = self.q / 2;
        let shift = if self.q % 2 == 0 {
            self.value >= half
        } else {
            self.value > half
        };
        if shift {
            Self {
                q: self.q,
                value: self.value - self.q,
            }
        } else {
            self
        }
    }

    /// Rounds a noisy encoding of a bit to 0 or 1.
    ///
    /// The result is 1 when the value is closer to q/2 than q/4, i.e.
    /// `|value - q/2| < q/4`, evaluated exactly as `|4·value - 2q| < q`.
    pub fn round(self) -> Self {
        let distance = (4 * self.value as i128 - 2 * self.q as i128).abs();
        Self {
            q: self.q,
            value: (distance < self.q as i128) as i64,
        }
    }

    #[inline]
    fn check_ring(&self, context: &'static str, other: &Self) -> Result<()> {
        validate::same_ring(context, self.ring(), other.ring())
    }
}

impl fmt::Display for ModularInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

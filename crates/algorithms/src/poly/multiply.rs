//! Ring multiplication strategies for R_q = Z_q[x]/(x^n + 1)
//!
//! Ring elements multiply through a [`RingMultiplier`], so a transform-based
//! backend can replace the quadratic convolution without any caller noticing.
//!
//! - [`Schoolbook`]: O(n²), no constraints on q or n

use latcrypt_api::error::Result;

use super::polynomial::RingElement;
use super::zq::ModularInteger;

/// Backend for ring multiplication in R_q.
///
/// Implementations must reject operands of different length with
/// `DimensionMismatch` and operands of different modulus with `RingMismatch`.
pub trait RingMultiplier {
    /// Multiply two ring elements in R_q.
    fn ring_mul(&self, a: &RingElement, b: &RingElement) -> Result<RingElement>;
}

/// Schoolbook O(n²) negacyclic convolution, always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct Schoolbook;

impl RingMultiplier for Schoolbook {
    fn ring_mul(&self, a: &RingElement, b: &RingElement) -> Result<RingElement> {
        a.check_compatible("ring multiplication", b)?;

        let n = a.n();
        let q = a.q();
        let mut acc = vec![ModularInteger::new(q, 0)?; n];

        for (i, ai) in a.coefficients().iter().enumerate() {
            for (j, bj) in b.coefficients().iter().enumerate() {
                let prod = ai.mul(bj)?;
                let pos = i + j;

                if pos < n {
                    acc[pos] = acc[pos].add(&prod)?;
                } else {
                    // x^n = -1, so x^(n+k) = -x^k
                    acc[pos - n] = acc[pos - n].sub(&prod)?;
                }
            }
        }

        RingElement::from_modular(q, acc)
    }
}

//! polynomial.rs - Elements of the negacyclic ring Z_q[x]/(x^n + 1)

use core::fmt;

use latcrypt_api::error::{validate, Result};
use latcrypt_api::RingId;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::multiply::{RingMultiplier, Schoolbook};
use super::zq::ModularInteger;

/// A polynomial in the ring R_q = Z_q[x]/(x^n + 1).
///
/// Coefficient `i` is the coefficient of x^i. The degree `n` is the length of
/// the coefficient sequence and never changes after construction; every
/// coefficient shares the element's modulus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct RingElement {
    q: i64,
    coefficients: Vec<ModularInteger>,
}

impl RingElement {
    /// Creates a polynomial from integer coefficients, reducing each mod q.
    ///
    /// For example 2x + 4x^2 in Z_5[x]/(x^5 + 1) is `new(5, &[0, 2, 4, 0, 0])`.
    pub fn new(q: i64, coefficients: &[i64]) -> Result<Self> {
        validate::modulus("RingElement", q)?;
        validate::construction(
            !coefficients.is_empty(),
            "RingElement",
            "coefficient sequence must not be empty",
        )?;
        let coefficients = coefficients
            .iter()
            .map(|&c| ModularInteger::new(q, c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { q, coefficients })
    }

    /// Creates a polynomial from elements of Z_q, re-reducing each under `q`.
    pub fn from_modular(q: i64, coefficients: Vec<ModularInteger>) -> Result<Self> {
        validate::modulus("RingElement", q)?;
        validate::construction(
            !coefficients.is_empty(),
            "RingElement",
            "coefficient sequence must not be empty",
        )?;
        let coefficients = coefficients
            .into_iter()
            .map(|c| {
                if c.q() == q {
                    Ok(c)
                } else {
                    ModularInteger::from_modular(q, c)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { q, coefficients })
    }

    /// The additive identity of Z_q[x]/(x^n + 1)
    pub fn zero(q: i64, n: usize) -> Result<Self> {
        Self::new(q, &vec![0; n])
    }

    /// The monomial x^degree; `degree` must be below n.
    pub fn monomial(q: i64, n: usize, degree: usize) -> Result<Self> {
        let mut coeffs = vec![0; n];
        validate::index("RingElement::monomial", degree, n)?;
        coeffs[degree] = 1;
        Self::new(q, &coeffs)
    }

    /// Ring degree n
    pub fn n(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient modulus q
    pub fn q(&self) -> i64 {
        self.q
    }

    /// The ring this element lives in
    pub fn ring(&self) -> RingId {
        RingId::new(self.q, self.n())
    }

    /// Returns the coefficient of x^i.
    pub fn at(&self, i: usize) -> Result<&ModularInteger> {
        validate::index("RingElement coefficient", i, self.n())?;
        Ok(&self.coefficients[i])
    }

    /// Returns a slice view of the coefficients
    pub fn coefficients(&self) -> &[ModularInteger] {
        &self.coefficients
    }

    /// Returns the coefficient representatives as plain integers
    pub fn values(&self) -> Vec<i64> {
        self.coefficients.iter().map(|c| c.value()).collect()
    }

    /// Draws every coefficient uniformly from Z_q.
    pub fn random_uniform<R: RngCore + CryptoRng>(n: usize, q: i64, rng: &mut R) -> Result<Self> {
        let coefficients = (0..n)
            .map(|_| ModularInteger::uniform(q, rng))
            .collect::<Result<Vec<_>>>()?;
        Self::from_modular(q, coefficients)
    }

    /// Draws every coefficient from CBD(eta), in symmetric form.
    pub fn random_centered_binomial<R: RngCore + CryptoRng>(
        n: usize,
        q: i64,
        eta: u8,
        rng: &mut R,
    ) -> Result<Self> {
        let coefficients = (0..n)
            .map(|_| ModularInteger::centered_binomial(q, eta, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_modular(q, coefficients)?.to_symmetric())
    }

    /// Polynomial addition modulo q
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with("polynomial addition", other, ModularInteger::add)
    }

    /// Polynomial subtraction modulo q
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with("polynomial subtraction", other, ModularInteger::sub)
    }

    /// Ring multiplication using the schoolbook convolution
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.mul_with(other, &Schoolbook)
    }

    /// Ring multiplication using an explicit backend
    pub fn mul_with<M: RingMultiplier + ?Sized>(&self, other: &Self, multiplier: &M) -> Result<Self> {
        multiplier.ring_mul(self, other)
    }

    /// Converts every coefficient to its symmetric representative.
    pub fn to_symmetric(mut self) -> Self {
        for c in self.coefficients.iter_mut() {
            *c = c.to_symmetric();
        }
        self
    }

    /// Rounds every coefficient to 0 or 1 to recover message bits.
    pub fn round(mut self) -> Self {
        for c in self.coefficients.iter_mut() {
            *c = c.round();
        }
        self
    }

    /// Single compatibility check guarding every binary operation
    pub(crate) fn check_compatible(&self, context: &'static str, other: &Self) -> Result<()> {
        validate::dimension(context, other.n(), self.n())?;
        validate::same_ring(context, self.ring(), other.ring())
    }

    fn zip_with<F>(&self, context: &'static str, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(&ModularInteger, &ModularInteger) -> Result<ModularInteger>,
    {
        self.check_compatible(context, other)?;
        let coefficients = self
            .coefficients
            .iter()
            .zip(other.coefficients.iter())
            .map(|(a, b)| op(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            q: self.q,
            coefficients,
        })
    }
}

impl fmt::Display for RingElement {
    /// Renders the polynomial as e.g. `4+x+2x^2`, lowest degree first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.coefficients.iter().enumerate() {
            let value = c.value();
            if value == 0 {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;
            match (i, value) {
                (0, v) => write!(f, "{}", v)?,
                (1, 1) => write!(f, "x")?,
                (1, v) => write!(f, "{}x", v)?,
                (i, 1) => write!(f, "x^{}", i)?,
                (i, v) => write!(f, "{}x^{}", v, i)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

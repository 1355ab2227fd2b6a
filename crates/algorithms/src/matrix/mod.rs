//! Module matrices over Z_q[x]/(x^n + 1).
//!
//! A [`RingMatrix`] is a rows × cols grid of [`RingElement`]s that all share the
//! matrix's ring. Column vectors (k × 1) carry secrets, noise and ciphertext
//! components; square matrices carry the public matrix A.

use core::fmt;

use latcrypt_api::error::{validate, Result};
use latcrypt_api::RingId;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroize;

use crate::poly::multiply::{RingMultiplier, Schoolbook};
use crate::poly::polynomial::RingElement;

/// A rows × cols matrix of elements of Z_q[x]/(x^n + 1), stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct RingMatrix {
    rows: usize,
    cols: usize,
    q: i64,
    n: usize,
    cells: Vec<RingElement>,
}

impl RingMatrix {
    /// Creates a rows × cols matrix with every cell set to zero.
    pub fn new(rows: usize, cols: usize, q: i64, n: usize) -> Result<Self> {
        validate::construction(rows > 0, "RingMatrix", "row count must be positive")?;
        validate::construction(cols > 0, "RingMatrix", "column count must be positive")?;
        let zero = RingElement::zero(q, n)?;
        Ok(Self {
            rows,
            cols,
            q,
            n,
            cells: vec![zero; rows * cols],
        })
    }

    /// Creates a matrix whose cells are drawn uniformly from the ring.
    pub fn random_uniform<R: RngCore + CryptoRng>(
        rows: usize,
        cols: usize,
        q: i64,
        n: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(rows, cols, q, n)?.fill_uniform(rng)
    }

    /// Creates a matrix whose coefficients are drawn from CBD(eta).
    pub fn random_centered_binomial<R: RngCore + CryptoRng>(
        rows: usize,
        cols: usize,
        q: i64,
        n: usize,
        eta: u8,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(rows, cols, q, n)?.fill_centered_binomial(eta, rng)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Coefficient modulus shared by every cell
    pub fn q(&self) -> i64 {
        self.q
    }

    /// Ring degree shared by every cell
    pub fn n(&self) -> usize {
        self.n
    }

    /// The ring every cell lives in
    pub fn ring(&self) -> RingId {
        RingId::new(self.q, self.n)
    }

    /// Reads the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&RingElement> {
        self.check_index(row, col)?;
        Ok(&self.cells[row * self.cols + col])
    }

    /// Writes the cell at `(row, col)`.
    ///
    /// This is the only in-place mutation a matrix offers. The value must live
    /// in the matrix's ring.
    pub fn set(&mut self, row: usize, col: usize, value: RingElement) -> Result<()> {
        self.check_index(row, col)?;
        validate::same_ring("RingMatrix::set", self.ring(), value.ring())?;
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns the cols × rows transpose.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                cells.push(self.cells[i * self.cols + j].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            q: self.q,
            n: self.n,
            cells,
        }
    }

    /// Module product `self · other` using schoolbook ring multiplication.
    pub fn mat_mul(&self, other: &Self) -> Result<Self> {
        self.mat_mul_with(other, &Schoolbook)
    }

    /// Module product `self · other` with an explicit ring multiplier.
    ///
    /// Cell (i, j) is Σ_k self[i, k] · other[k, j], accumulated left to right.
    pub fn mat_mul_with<M: RingMultiplier + ?Sized>(&self, other: &Self, multiplier: &M) -> Result<Self> {
        validate::dimension("matrix product inner dimension", other.rows, self.cols)?;
        validate::same_ring("matrix product", self.ring(), other.ring())?;
        trace!(
            lhs_rows = self.rows,
            inner = self.cols,
            rhs_cols = other.cols,
            n = self.n,
            "module matrix product"
        );

        let mut cells = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = RingElement::zero(self.q, self.n)?;
                for k in 0..self.cols {
                    let prod = self.cells[i * self.cols + k]
                        .mul_with(&other.cells[k * other.cols + j], multiplier)?;
                    acc = acc.add(&prod)?;
                }
                cells.push(acc);
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            q: self.q,
            n: self.n,
            cells,
        })
    }

    /// Cellwise ring product
    pub fn elementwise_mul(&self, other: &Self) -> Result<Self> {
        self.zip_with("elementwise matrix product", other, RingElement::mul)
    }

    /// Cellwise sum
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with("matrix addition", other, RingElement::add)
    }

    /// Cellwise difference
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with("matrix subtraction", other, RingElement::sub)
    }

    /// Replaces every cell with a uniformly sampled ring element.
    ///
    /// Consumes the matrix, so it is only ever applied to a value nobody
    /// else can observe.
    pub fn fill_uniform<R: RngCore + CryptoRng>(mut self, rng: &mut R) -> Result<Self> {
        for cell in self.cells.iter_mut() {
            *cell = RingElement::random_uniform(self.n, self.q, rng)?;
        }
        Ok(self)
    }

    /// Replaces every cell with a ring element whose coefficients follow CBD(eta).
    pub fn fill_centered_binomial<R: RngCore + CryptoRng>(mut self, eta: u8, rng: &mut R) -> Result<Self> {
        for cell in self.cells.iter_mut() {
            *cell = RingElement::random_centered_binomial(self.n, self.q, eta, rng)?;
        }
        Ok(self)
    }

    /// Rounds every coefficient of every cell to 0 or 1.
    pub fn round(mut self) -> Self {
        self.cells = self.cells.into_iter().map(RingElement::round).collect();
        self
    }

    /// Reads the message bits held in cell (0, 0).
    pub fn extract_message(&self) -> Vec<i64> {
        self.cells[0].values()
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        validate::index("matrix row", row, self.rows)?;
        validate::index("matrix column", col, self.cols)
    }

    fn zip_with<F>(&self, context: &'static str, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(&RingElement, &RingElement) -> Result<RingElement>,
    {
        validate::dimension(context, other.rows, self.rows)?;
        validate::dimension(context, other.cols, self.cols)?;
        validate::same_ring(context, self.ring(), other.ring())?;

        let cells = self
            .cells
            .iter()
            .zip(other.cells.iter())
            .map(|(a, b)| op(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            q: self.q,
            n: self.n,
            cells,
        })
    }
}

impl fmt::Display for RingMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "[{}]", cell)?;
            }
        }
        Ok(())
    }
}

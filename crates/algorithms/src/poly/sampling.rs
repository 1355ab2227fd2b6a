//! sampling.rs - Raw coefficient samplers
//!
//! These draw plain integers; [`ModularInteger`](super::zq::ModularInteger)
//! wraps them into the ring. The random source is always supplied by the
//! caller so runs can be reproduced from a seed.

use rand::{CryptoRng, Rng, RngCore};

/// Draws an integer uniformly from `[0, q)`.
///
/// `q` must be positive; callers validate the modulus first.
#[inline]
pub fn uniform<R: RngCore + CryptoRng>(rng: &mut R, q: i64) -> i64 {
    rng.gen_range(0..q)
}

/// Draws from the centered binomial distribution CBD(eta).
///
/// Two batches of `eta` fair bits are summed and the second sum is subtracted
/// from the first, giving a value in `[-eta, eta]`.
pub fn centered_binomial<R: RngCore + CryptoRng>(rng: &mut R, eta: u8) -> i64 {
    let a: i64 = (0..eta).map(|_| rng.gen::<bool>() as i64).sum();
    let b: i64 = (0..eta).map(|_| rng.gen::<bool>() as i64).sum();
    a - b
}

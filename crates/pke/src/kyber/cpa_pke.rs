// pke/src/kyber/cpa_pke.rs

//! Kyber CPA-secure Public Key Encryption scheme.

use latcrypt_algorithms::error::validate;
use latcrypt_algorithms::{RingElement, RingId, RingMatrix};
use latcrypt_params::Params;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::keys::{Ciphertext, PublicKey, SecretKey};
use crate::error::{Error, Result};

/// Rejects parameters that cannot describe a scheme instance.
pub(crate) fn check_params(params: &Params) -> Result<()> {
    if params.k == 0 {
        return Err(Error::InvalidParameters("module rank k must be positive"));
    }
    if params.n == 0 {
        return Err(Error::InvalidParameters("ring degree n must be positive"));
    }
    validate::modulus("PKE parameters", params.q)?;
    Ok(())
}

/// Encode message bits into a 1 × 1 matrix.
///
/// Bit b becomes the coefficient `round(q/2 · b + 1/2)`, i.e. `(q + 1) / 2`
/// for a one and 0 for a zero.
fn encode_message(params: &Params, message: &[u8]) -> Result<RingMatrix> {
    if message.len() != params.n {
        return Err(Error::InvalidMessageLength {
            expected: params.n,
            actual: message.len(),
        });
    }

    let one = (params.q + 1) / 2;
    let coeffs = message
        .iter()
        .enumerate()
        .map(|(index, &bit)| match bit {
            0 => Ok(0),
            1 => Ok(one),
            value => Err(Error::InvalidMessageBit { index, value }),
        })
        .collect::<Result<Vec<i64>>>()?;

    let mut m = RingMatrix::new(1, 1, params.q, params.n)?;
    m.set(0, 0, RingElement::new(params.q, &coeffs)?)?;
    Ok(m)
}

/// Checks that a peer's public key fits the parameters.
fn check_public_key(params: &Params, pk: &PublicKey) -> Result<()> {
    if pk.a.shape() != (params.k, params.k) {
        return Err(Error::InvalidKey("public matrix A must be k x k"));
    }
    if pk.t.shape() != (params.k, 1) {
        return Err(Error::InvalidKey("public vector t must be k x 1"));
    }
    let ring = RingId::new(params.q, params.n);
    validate::same_ring("PKE public key", ring, pk.a.ring())?;
    validate::same_ring("PKE public key", ring, pk.t.ring())?;
    Ok(())
}

/// Checks that a secret key belongs to the parameters.
pub(crate) fn check_secret_key(params: &Params, sk: &SecretKey) -> Result<()> {
    let s = sk.as_matrix();
    if s.shape() != (params.k, 1) {
        return Err(Error::InvalidKey("secret vector s must be k x 1"));
    }
    validate::same_ring("PKE secret key", RingId::new(params.q, params.n), s.ring())?;
    Ok(())
}

/// Key Generation.
///
/// Samples A uniformly, s from CBD(eta1) and e from CBD(eta2), and publishes
/// `(A, t = A·s + e)`.
pub fn keygen<R: RngCore + CryptoRng>(params: &Params, rng: &mut R) -> Result<(PublicKey, SecretKey)> {
    check_params(params)?;
    let Params { k, n, q, eta1, eta2, .. } = *params;
    debug!(k, n, q, eta1, eta2, "generating key pair");

    let a = RingMatrix::random_uniform(k, k, q, n, rng)?;
    let s = RingMatrix::random_centered_binomial(k, 1, q, n, eta1, rng)?;
    let e = RingMatrix::random_centered_binomial(k, 1, q, n, eta2, rng)?;

    // t = A·s + e
    let t = a.mat_mul(&s)?.add(&e)?;

    Ok((PublicKey { a, t }, SecretKey::new(s)))
}

/// Encryption of `n` message bits under a peer's public key.
///
/// Samples r from CBD(eta1), e1 and e2 from CBD(eta2), then computes
/// `u = Aᵀ·r + e1` and `v = tᵀ·r + e2 + m`.
pub fn encrypt<R: RngCore + CryptoRng>(
    params: &Params,
    message: &[u8],
    peer: &PublicKey,
    rng: &mut R,
) -> Result<Ciphertext> {
    check_params(params)?;
    check_public_key(params, peer)?;
    let Params { k, n, q, eta1, eta2, .. } = *params;
    let m = encode_message(params, message)?;
    debug!(k, n, q, "encrypting message");

    let r = RingMatrix::random_centered_binomial(k, 1, q, n, eta1, rng)?;
    let e1 = RingMatrix::random_centered_binomial(k, 1, q, n, eta2, rng)?;
    let e2 = RingMatrix::random_centered_binomial(1, 1, q, n, eta2, rng)?;

    let u = peer.a.transpose().mat_mul(&r)?.add(&e1)?;
    let v = peer.t.transpose().mat_mul(&r)?.add(&e2)?.add(&m)?;

    Ok(Ciphertext { u, v })
}

/// Decryption with the matching secret key.
///
/// Computes `d = v − sᵀ·u`, rounds each coefficient to 0 or 1 and returns the
/// bits of cell (0, 0).
pub fn decrypt(secret: &SecretKey, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
    let Ciphertext { u, v } = ciphertext;
    if u.cols() != 1 {
        return Err(Error::InvalidCiphertextFormat("u must be a column vector"));
    }
    if v.shape() != (1, 1) {
        return Err(Error::InvalidCiphertextFormat("v must hold a single ring element"));
    }

    let s = secret.as_matrix();
    debug!(k = s.rows(), n = s.n(), q = s.q(), "decrypting ciphertext");

    let d = v.sub(&s.transpose().mat_mul(u)?)?;
    Ok(d.round()
        .extract_message()
        .into_iter()
        .map(|bit| bit as u8)
        .collect())
}

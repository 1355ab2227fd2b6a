//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for lattice Public Key Encryption schemes.
///
/// Parameters are runtime values, so the scheme object carries them and every
/// operation takes `&self`. Messages cross this boundary as unpacked bits: one
/// `u8` holding 0 or 1 per ring coefficient.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey: Zeroize + Clone;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a message of unpacked bits under the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `message` - One bit (0 or 1) per ring coefficient.
    /// * `rng` - Source of the encryption randomness.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// Decryption is probabilistic: a bit whose accumulated noise crosses the
    /// rounding threshold comes back flipped, and this is not reported as an
    /// error.
    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Vec<u8>>;
}

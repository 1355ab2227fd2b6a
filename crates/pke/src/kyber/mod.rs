// pke/src/kyber/mod.rs

//! Kyber-style CPA-secure module-lattice public key encryption.
//!
//! Key generation publishes `(A, t = A·s + e)`; encryption produces
//! `u = Aᵀ·r + e1` and `v = tᵀ·r + e2 + m`; decryption rounds `v − sᵀ·u`.
//! Correctness is probabilistic: a coefficient whose accumulated noise exceeds
//! q/4 decrypts to the wrong bit, and that is not reported as an error.

mod cpa_pke; // KeyGen, Encrypt, Decrypt and message encoding
mod keys; // Key and ciphertext containers
mod scheme; // ModuleLwePke and its api::Pke implementation

pub use self::cpa_pke::{decrypt, encrypt, keygen};
pub use self::keys::{Ciphertext, PublicKey, SecretKey};
pub use self::scheme::ModuleLwePke;

//! Public Key Encryption (PKE) schemes for the latcrypt library.
//!
//! The [`kyber`] module implements the CPA-secure module-lattice scheme:
//! key generation, encryption and decryption composed entirely from
//! [`RingMatrix`](latcrypt_algorithms::RingMatrix) operations.

pub mod error;
pub mod kyber;

// Re-export key items
pub use error::{Error, Result};
pub use kyber::{decrypt, encrypt, keygen, Ciphertext, ModuleLwePke, PublicKey, SecretKey};
pub use latcrypt_params::Params;

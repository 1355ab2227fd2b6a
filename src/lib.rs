//! # latcrypt
//!
//! The algebraic core of a Kyber-style module-lattice public-key encryption
//! scheme.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! latcrypt = "0.3"
//! ```
//!
//! ```no_run
//! use latcrypt::prelude::*;
//! use latcrypt::rand::rngs::OsRng;
//! use latcrypt::zeroize::Zeroize;
//!
//! let scheme = ModuleLwePke::new(KYBER512)?;
//! let (pk, sk) = scheme.keypair(&mut OsRng)?;
//! let message = vec![1u8; KYBER512.n];
//! let ct = scheme.encrypt(&pk, &message, &mut OsRng)?;
//! let bits = scheme.decrypt(&sk, &ct)?;
//! assert_eq!(bits.len(), message.len());
//!
//! let mut sk = sk;
//! sk.zeroize();
//! # Ok::<(), latcrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: (de)serialization of [`params::Params`] and ring identifiers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`latcrypt-api`]: Error taxonomy, ring identifiers and the `Pke` trait
//! - [`latcrypt-params`]: Parameter record and the Kyber presets
//! - [`latcrypt-algorithms`]: Z_q, Z_q[x]/(x^n + 1) and module matrices
//! - [`latcrypt-pke`]: Key generation, encryption and decryption

pub use latcrypt_algorithms as algorithms;
pub use latcrypt_api as api;
pub use latcrypt_params as params;
pub use latcrypt_pke as pke;

// Re-export the RNG and zeroize crates the public API is written against
pub use rand;
pub use zeroize;

/// Common imports for latcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::Pke;

    // Algebra
    pub use crate::algorithms::{ModularInteger, RingElement, RingMatrix, RingMultiplier, Schoolbook};

    // Scheme
    pub use crate::params::{Params, KYBER1024, KYBER512, KYBER768};
    pub use crate::pke::{Ciphertext, ModuleLwePke, PublicKey, SecretKey};
}

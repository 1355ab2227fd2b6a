//! Parameter sets for latcrypt
//!
//! [`Params`] is the plain configuration record consumed by the PKE scheme.
//! The `pqc` module carries the named Kyber-style presets.

pub mod pqc;

pub use pqc::kyber::{Params, KYBER1024, KYBER512, KYBER768, KYBER_N, KYBER_Q};

//! Public API traits and types for the latcrypt library
//!
//! This crate provides the public API surface shared by every latcrypt crate:
//! the error taxonomy raised by the lattice algebra, the [`RingId`] used to
//! describe which ring a value lives in, and the [`Pke`] trait implemented by
//! encryption schemes.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::Pke;
pub use traits::pke;

//! Traits implemented by latcrypt schemes.

pub mod pke;

pub use pke::Pke;

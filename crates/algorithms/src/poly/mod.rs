// Path: crates/algorithms/src/poly/mod.rs
//! Polynomial engine over Z_q[x]/(x^n + 1)
//!
//! The ring parameters are runtime values validated once at construction, so a
//! single explicit compatibility check guards every binary operation.

pub mod multiply;
pub mod polynomial;
pub mod sampling;
pub mod zq;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::multiply::{RingMultiplier, Schoolbook};
    pub use super::polynomial::RingElement;
    pub use super::zq::ModularInteger;
}

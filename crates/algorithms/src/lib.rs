//! Lattice algebra for the latcrypt library
//!
//! The crate is layered bottom-up:
//!
//! - [`poly::zq`]: [`ModularInteger`], an element of Z_q
//! - [`poly::polynomial`]: [`RingElement`], an element of Z_q[x]/(x^n + 1)
//! - [`poly::multiply`]: the [`RingMultiplier`] strategy and its schoolbook
//!   implementation
//! - [`matrix`]: [`RingMatrix`], rows × cols grids of ring elements
//!
//! Each layer only manipulates the layer directly beneath it.

pub mod matrix;
pub mod poly;

pub use latcrypt_api::error::{self, Error, Result};
pub use latcrypt_api::RingId;

pub use matrix::RingMatrix;
pub use poly::multiply::{RingMultiplier, Schoolbook};
pub use poly::polynomial::RingElement;
pub use poly::zq::ModularInteger;

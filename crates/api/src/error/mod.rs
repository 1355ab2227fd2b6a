//! Error handling for the lattice algebra

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export validation utilities module
pub use validate as validation;

//! # Rank-1 Constraint Systems
//!
//! Dense matrix representation of an R1CS, entry reduction from signed
//! integers into the field, and witness satisfaction checking.

pub mod error;
pub mod system;

pub use error::R1csError;
pub use system::R1cs;

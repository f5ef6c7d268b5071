//! # Example Circuits
//!
//! Hand-flattened circuits for exercising the proving pipeline: each one
//! produces its R1CS matrices (signed integer entries, reduced into the
//! field on construction) and the matching witness vector.

pub mod multiplier;
pub mod quartic;

pub use multiplier::MultiplierCircuit;
pub use quartic::QuarticCircuit;

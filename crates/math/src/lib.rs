//! # Mathematical Primitives
//!
//! Dense univariate polynomial arithmetic over a prime field, shared by
//! the QAP builder and the proving system.

pub mod polynomial;


pub use polynomial::{Poly, PolyError};

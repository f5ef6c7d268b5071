//! # Quadratic Arithmetic Programs
//!
//! The polynomial encoding of an R1CS: each wire column of the three
//! constraint matrices is interpolated at the points `1..=n` into a
//! polynomial of degree below `n`. A witness satisfies the R1CS exactly
//! when the vanishing polynomial of those points divides
//! `L(x)·R(x) − O(x)`, where `L, R, O` are the witness-weighted
//! combinations of the interpolated polynomials.

pub mod build;
pub mod error;
pub mod interpolation;
pub mod vanishing;

pub use build::Qap;
pub use error::QapError;
pub use interpolation::lagrange_interpolate;
pub use vanishing::vanishing_polynomial;

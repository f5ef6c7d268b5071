use thiserror::Error;

/// Errors raised by setup and proving.
///
/// Verification is a total function and signals rejection with `false`,
/// never through this enum.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Groth16Error {
    #[error("witness length mismatch: expected {expected}, got {actual}")]
    BadWitnessLength { expected: usize, actual: usize },

    #[error("witness does not satisfy the constraint system")]
    InvalidWitness,

    #[error("random source kept producing zero scalars")]
    BadRandomness,
}

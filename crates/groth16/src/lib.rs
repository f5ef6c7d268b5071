//! # Proving System
//!
//! Trusted setup, prover and verifier for the simplified Groth16
//! protocol over BN254: the common reference string carries no `γ`/`δ`
//! terms and proofs carry no blinding, so the verifier checks
//! `e(A, B) = e([α]₁, [β]₂) · e(C, G₂)` with no public-input split.
//! Proofs attest QAP satisfaction; they are not zero-knowledge.

pub mod crs;
pub mod error;
pub mod prove;
pub mod setup;
pub mod verify;

pub use crs::{Crs, VerifyingKey};
pub use error::Groth16Error;
pub use prove::{prove, Proof};
pub use setup::{run_setup, run_setup_with_secrets};
pub use verify::verify_proof;

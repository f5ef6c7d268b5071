use crate::crs::VerifyingKey;
use crate::prove::Proof;
use ark_bn254::{Bn254, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;

/// Checks the pairing equation `e(A, B) = e([α]₁, [β]₂) · e(C, G₂)` in
/// the target group.
///
/// Total function: a proof that fails the equation yields `false`,
/// never an error, and verification has no side effects. The cost is
/// three pairings regardless of circuit size.
pub fn verify_proof(vk: &VerifyingKey, proof: &Proof) -> bool {
    let lhs = Bn254::pairing(proof.a, proof.b);
    let alpha_beta = Bn254::pairing(vk.alpha_g1, vk.beta_g2);
    let c_g2 = Bn254::pairing(proof.c, G2Affine::generator());
    lhs.0 == alpha_beta.0 * c_g2.0
}

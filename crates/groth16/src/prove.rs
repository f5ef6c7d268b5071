use crate::crs::Crs;
use crate::error::Groth16Error;
use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::CurveGroup;
use ark_ff::Zero;
use snark_math::Poly;
use snark_qap::Qap;

/// A proof of QAP satisfaction: three group elements, `a` and `c` in
/// G₁, `b` in G₂.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

/// Produces a proof that `witness` satisfies the constraint system
/// behind `qap`, using the reference string from setup.
///
/// # Algorithm
///
/// 1. Combine the wire polynomials with the witness:
///    `L(x) = Σⱼ aⱼ·uⱼ(x)`, likewise `R` and `O`.
/// 2. Divide: `h(x) = (L·R − O) / t(x)`. A nonzero remainder means the
///    witness does not satisfy the system, and the prover fails with
///    [`Groth16Error::InvalidWitness`] before any proof element is
///    formed.
/// 3. Assemble the proof elements as inner products against the
///    reference string:
///    * `A = [α]₁ + [L(τ)]₁` via the G₁ powers of τ,
///    * `B = [β]₂ + [R(τ)]₂` via the G₂ powers of τ,
///    * `C = [Σⱼ aⱼ·ψⱼ]₁ + [h(τ)·t(τ)]₁` via the ψ vector and the
///      `τ^k·t(τ)` powers.
///
/// The coefficient vectors feeding the inner products come from
/// [`Poly::coefficients_descending`], descending and left-padded to the
/// SRS length, matching the ordering the setup fixed. `h(τ)·t(τ)` is
/// reconstructed strictly from the `t_tau_srs` points; no τ-dependent
/// scalar is ever computed in the clear.
pub fn prove(crs: &Crs, qap: &Qap<Fr>, witness: &[Fr]) -> Result<Proof, Groth16Error> {
    if witness.len() != qap.num_wires() {
        return Err(Groth16Error::BadWitnessLength {
            expected: qap.num_wires(),
            actual: witness.len(),
        });
    }

    let n = qap.num_constraints();

    let l_poly = combine(&qap.u, witness);
    let r_poly = combine(&qap.v, witness);
    let o_poly = combine(&qap.w, witness);

    let numerator = l_poly.clone() * r_poly.clone() - o_poly;
    let (h, remainder) = numerator
        .divide_with_remainder(&qap.t)
        .expect("vanishing polynomial is nonzero");
    if !remainder.is_zero() {
        return Err(Groth16Error::InvalidWitness);
    }

    let a = (msm_g1(&crs.g1_srs, &l_poly.coefficients_descending(n)) + crs.alpha_g1).into_affine();
    let b = (msm_g2(&crs.g2_srs, &r_poly.coefficients_descending(n)) + crs.beta_g2).into_affine();

    let psi_term = msm_g1(&crs.psis, witness);
    let h_t_term = msm_g1(
        &crs.t_tau_srs,
        &h.coefficients_descending(n.saturating_sub(1)),
    );
    let c = (psi_term + h_t_term).into_affine();

    Ok(Proof { a, b, c })
}

/// `Σⱼ witness[j] · polys[j]` as a polynomial.
fn combine(polys: &[Poly<Fr>], witness: &[Fr]) -> Poly<Fr> {
    polys
        .iter()
        .zip(witness)
        .fold(Poly::zero(), |acc, (poly, w)| acc + poly.scale(*w))
}

/// Inner product of scalars against G₁ points, accumulated from the
/// group identity. Zero scalars contribute the identity and are
/// skipped.
fn msm_g1(bases: &[G1Affine], scalars: &[Fr]) -> G1Projective {
    let mut acc = G1Projective::zero();
    for (base, scalar) in bases.iter().zip(scalars) {
        if scalar.is_zero() {
            continue;
        }
        acc += *base * *scalar;
    }
    acc
}

fn msm_g2(bases: &[G2Affine], scalars: &[Fr]) -> G2Projective {
    let mut acc = G2Projective::zero();
    for (base, scalar) in bases.iter().zip(scalars) {
        if scalar.is_zero() {
            continue;
        }
        acc += *base * *scalar;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::run_setup_with_secrets;
    use ark_bn254::Fr;
    use ark_ec::AffineRepr;
    use ark_ff::One;
    use snark_r1cs::R1cs;

    // Two copies of a · b = c over wires [1, c, a, b].
    fn fixture() -> (Qap<Fr>, Crs) {
        let r1cs = R1cs::new(
            &[vec![0, 0, 1, 0], vec![0, 0, 1, 0]],
            &[vec![0, 0, 0, 1], vec![0, 0, 0, 1]],
            &[vec![0, 1, 0, 0], vec![0, 1, 0, 0]],
        )
        .unwrap();
        let qap = Qap::from_r1cs(&r1cs);
        let crs =
            run_setup_with_secrets(&qap, Fr::from(7u64), Fr::from(3u64), Fr::from(5u64)).unwrap();
        (qap, crs)
    }

    fn witness(a: u64, b: u64, c: u64) -> Vec<Fr> {
        vec![Fr::one(), Fr::from(c), Fr::from(a), Fr::from(b)]
    }

    #[test]
    fn proof_elements_are_not_the_identity() {
        let (qap, crs) = fixture();
        let proof = prove(&crs, &qap, &witness(3, 4, 12)).unwrap();
        assert_ne!(proof.a, G1Affine::identity());
        assert_ne!(proof.b, G2Affine::identity());
        assert_ne!(proof.c, G1Affine::identity());
    }

    #[test]
    fn proving_is_deterministic() {
        let (qap, crs) = fixture();
        let w = witness(3, 4, 12);
        assert_eq!(prove(&crs, &qap, &w).unwrap(), prove(&crs, &qap, &w).unwrap());
    }

    #[test]
    fn a_matches_the_manual_construction() {
        let (qap, crs) = fixture();
        let w = witness(3, 4, 12);
        let proof = prove(&crs, &qap, &w).unwrap();

        // A = [α + Σⱼ aⱼ·uⱼ(τ)]₁ with the secrets known in the test
        let tau = Fr::from(7u64);
        let sum: Fr = (0..4).map(|j| w[j] * qap.u[j].evaluate(tau)).sum();
        let expected =
            (G1Affine::generator() * (Fr::from(3u64) + sum)).into_affine();
        assert_eq!(proof.a, expected);
    }

    #[test]
    fn b_matches_the_manual_construction() {
        let (qap, crs) = fixture();
        let w = witness(3, 4, 12);
        let proof = prove(&crs, &qap, &w).unwrap();

        let tau = Fr::from(7u64);
        let sum: Fr = (0..4).map(|j| w[j] * qap.v[j].evaluate(tau)).sum();
        let expected =
            (G2Affine::generator() * (Fr::from(5u64) + sum)).into_affine();
        assert_eq!(proof.b, expected);
    }

    #[test]
    fn c_matches_the_manual_construction() {
        let (qap, crs) = fixture();
        let w = witness(3, 4, 12);
        let proof = prove(&crs, &qap, &w).unwrap();

        // ψ sum plus h(τ)·t(τ), recomputed from the known secrets
        let tau = Fr::from(7u64);
        let (alpha, beta) = (Fr::from(3u64), Fr::from(5u64));
        let mut scalar = Fr::zero();
        for j in 0..4 {
            scalar += w[j]
                * (alpha * qap.v[j].evaluate(tau)
                    + beta * qap.u[j].evaluate(tau)
                    + qap.w[j].evaluate(tau));
        }
        let numerator = combine(&qap.u, &w) * combine(&qap.v, &w) - combine(&qap.w, &w);
        let (h, _) = numerator.divide_with_remainder(&qap.t).unwrap();
        scalar += h.evaluate(tau) * qap.t.evaluate(tau);

        let expected = (G1Affine::generator() * scalar).into_affine();
        assert_eq!(proof.c, expected);
    }

    #[test]
    fn wrong_witness_length_is_rejected() {
        let (qap, crs) = fixture();
        let err = prove(&crs, &qap, &[Fr::one(), Fr::one()]).unwrap_err();
        assert_eq!(
            err,
            Groth16Error::BadWitnessLength {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn unsatisfying_witness_is_rejected_before_proving() {
        let (qap, crs) = fixture();
        let err = prove(&crs, &qap, &witness(3, 4, 13)).unwrap_err();
        assert_eq!(err, Groth16Error::InvalidWitness);
    }

    #[test]
    fn quotient_degree_is_bounded_for_satisfying_witnesses() {
        let (qap, _) = fixture();
        let w = witness(3, 4, 12);
        let numerator = combine(&qap.u, &w) * combine(&qap.v, &w) - combine(&qap.w, &w);
        let (h, remainder) = numerator.divide_with_remainder(&qap.t).unwrap();
        assert!(remainder.is_zero());
        assert!(h.is_zero() || h.degree() <= qap.num_constraints() - 2);
    }
}

use ark_ff::{One, PrimeField};
use snark_r1cs::{R1cs, R1csError};

/// The worked example circuit `z = x⁴ − 5·y²·x²`, flattened as
///
/// ```text
/// v1 = x · x
/// v2 = v1 · v1        (x⁴)
/// v3 = −5y · y
/// z − v2 = v3 · v1    (−5·y²·x²)
/// ```
///
/// over the wire vector `[1, z, x, y, v1, v2, v3]`: four constraints,
/// seven wires. Generic over the field so the same circuit runs over a
/// hand-checkable small prime and over BN254's scalar field.
pub struct QuarticCircuit<F: PrimeField> {
    pub x: F,
    pub y: F,
}

impl<F: PrimeField> QuarticCircuit<F> {
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// The three constraint matrices. The `−5` and `−1` entries reduce
    /// into the field when the R1CS is built.
    pub fn matrices() -> (Vec<Vec<i64>>, Vec<Vec<i64>>, Vec<Vec<i64>>) {
        let l = vec![
            vec![0, 0, 1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 0],
            vec![0, 0, 0, -5, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 1],
        ];
        let r = vec![
            vec![0, 0, 1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 0],
            vec![0, 0, 0, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 0],
        ];
        let o = vec![
            vec![0, 0, 0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 1],
            vec![0, 1, 0, 0, 0, -1, 0],
        ];
        (l, r, o)
    }

    /// The constraint system over `F`.
    pub fn r1cs() -> Result<R1cs<F>, R1csError> {
        let (l, r, o) = Self::matrices();
        R1cs::new(&l, &r, &o)
    }

    /// The wire assignment `[1, z, x, y, v1, v2, v3]` with the
    /// intermediate wires computed from `x` and `y`.
    pub fn witness(&self) -> Vec<F> {
        let v1 = self.x * self.x;
        let v2 = v1 * v1;
        let v3 = -F::from(5u64) * self.y * self.y;
        let z = v3 * v1 + v2;
        vec![F::one(), z, self.x, self.y, v1, v2, v3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::fields::{Fp64, MontBackend, MontConfig};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use snark_groth16::{prove, run_setup, run_setup_with_secrets, verify_proof, Groth16Error};
    use snark_math::Poly;
    use snark_qap::Qap;

    /// 79-element field for hand-checkable runs of the algebraic layer.
    #[derive(MontConfig)]
    #[modulus = "79"]
    #[generator = "3"]
    pub struct F79Config;
    pub type F79 = Fp64<MontBackend<F79Config, 1>>;

    fn combine<F: PrimeField>(polys: &[Poly<F>], witness: &[F]) -> Poly<F> {
        polys
            .iter()
            .zip(witness)
            .fold(Poly::zero(), |acc, (p, w)| acc + p.scale(*w))
    }

    #[test]
    fn small_field_witness_satisfies_the_r1cs() {
        // x = 4, y = 77 ≡ −2 over F_79
        let circuit = QuarticCircuit::new(F79::from(4u64), F79::from(77u64));
        let r1cs = QuarticCircuit::<F79>::r1cs().unwrap();
        assert_eq!(r1cs.num_constraints(), 4);
        assert_eq!(r1cs.num_wires(), 7);
        assert!(r1cs.is_satisfied(&circuit.witness()));
    }

    #[test]
    fn small_field_combination_divides_by_the_vanishing_polynomial() {
        let circuit = QuarticCircuit::new(F79::from(4u64), F79::from(77u64));
        let qap = Qap::from_r1cs(&QuarticCircuit::<F79>::r1cs().unwrap());
        let witness = circuit.witness();

        let numerator = combine(&qap.u, &witness) * combine(&qap.v, &witness)
            - combine(&qap.w, &witness);
        let (h, remainder) = numerator.divide_with_remainder(&qap.t).unwrap();
        assert!(remainder.is_zero());
        assert!(h.is_zero() || h.degree() <= qap.num_constraints() - 2);
    }

    #[test]
    fn production_field_proof_round_trips_with_fixed_secrets() {
        let circuit = QuarticCircuit::new(Fr::from(4u64), -Fr::from(2u64));
        let r1cs = QuarticCircuit::<Fr>::r1cs().unwrap();
        let witness = circuit.witness();
        assert!(r1cs.is_satisfied(&witness));

        let qap = Qap::from_r1cs(&r1cs);
        let crs =
            run_setup_with_secrets(&qap, Fr::from(7u64), Fr::from(3u64), Fr::from(5u64)).unwrap();
        let proof = prove(&crs, &qap, &witness).unwrap();
        assert!(verify_proof(&crs.verifying_key(), &proof));
    }

    #[test]
    fn all_twos_witness_is_rejected_by_the_prover() {
        let qap = Qap::from_r1cs(&QuarticCircuit::<Fr>::r1cs().unwrap());
        let crs =
            run_setup_with_secrets(&qap, Fr::from(7u64), Fr::from(3u64), Fr::from(5u64)).unwrap();

        let bogus = vec![Fr::from(2u64); 7];
        let err = prove(&crs, &qap, &bogus).unwrap_err();
        assert_eq!(err, Groth16Error::InvalidWitness);
    }

    #[test]
    fn quotient_degree_stays_within_the_aux_srs() {
        let circuit = QuarticCircuit::new(Fr::from(4u64), -Fr::from(2u64));
        let qap = Qap::from_r1cs(&QuarticCircuit::<Fr>::r1cs().unwrap());
        let witness = circuit.witness();

        let numerator = combine(&qap.u, &witness) * combine(&qap.v, &witness)
            - combine(&qap.w, &witness);
        let (h, _) = numerator.divide_with_remainder(&qap.t).unwrap();
        assert!(h.degree() <= 2);
    }

    #[test]
    fn witness_layout_matches_the_flattening() {
        let circuit = QuarticCircuit::new(Fr::from(4u64), -Fr::from(2u64));
        let w = circuit.witness();
        assert_eq!(w.len(), 7);
        assert_eq!(w[0], Fr::one());
        assert_eq!(w[4], Fr::from(16u64)); // v1 = x²
        assert_eq!(w[5], Fr::from(256u64)); // v2 = x⁴
        assert_eq!(w[6], -Fr::from(20u64)); // v3 = −5y²
        assert_eq!(w[1], Fr::from(256u64) - Fr::from(320u64)); // z
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn round_trip_for_random_inputs(x in any::<u64>(), y in any::<u64>(), seed in any::<[u8; 32]>()) {
            let circuit = QuarticCircuit::new(Fr::from(x), Fr::from(y));
            let r1cs = QuarticCircuit::<Fr>::r1cs().unwrap();
            let witness = circuit.witness();
            prop_assert!(r1cs.is_satisfied(&witness));

            let qap = Qap::from_r1cs(&r1cs);
            let mut rng = rand_chacha::ChaCha8Rng::from_seed(seed);
            let crs = run_setup(&qap, &mut rng).unwrap();
            let proof = prove(&crs, &qap, &witness).unwrap();
            prop_assert!(verify_proof(&crs.verifying_key(), &proof));
        }

        #[test]
        fn division_law_for_random_inputs(x in any::<u64>(), y in any::<u64>()) {
            let circuit = QuarticCircuit::new(Fr::from(x), Fr::from(y));
            let qap = Qap::from_r1cs(&QuarticCircuit::<Fr>::r1cs().unwrap());
            let witness = circuit.witness();

            let numerator = combine(&qap.u, &witness) * combine(&qap.v, &witness)
                - combine(&qap.w, &witness);
            let (h, remainder) = numerator.divide_with_remainder(&qap.t).unwrap();
            prop_assert!(remainder.is_zero());
            prop_assert_eq!(h * qap.t.clone(), numerator);
        }
    }
}

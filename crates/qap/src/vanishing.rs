use ark_ff::{One, PrimeField};
use snark_math::Poly;

/// The vanishing polynomial `t(x) = ∏ᵢ₌₁ⁿ (x − i)` of the constraint
/// points, built by iterative multiplication from the constant
/// polynomial 1. Degree is exactly `num_constraints`.
pub fn vanishing_polynomial<F: PrimeField>(num_constraints: usize) -> Poly<F> {
    let mut t = Poly::constant(F::one());
    for i in 1..=num_constraints as u64 {
        t = t * Poly::linear(-F::from(i), F::one());
    }
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::Zero;

    #[test]
    fn degree_matches_constraint_count() {
        for n in 1..6 {
            assert_eq!(vanishing_polynomial::<Fr>(n).degree(), n);
        }
    }

    #[test]
    fn vanishes_exactly_on_the_constraint_points() {
        let t = vanishing_polynomial::<Fr>(4);
        for i in 1u64..=4 {
            assert!(t.evaluate(Fr::from(i)).is_zero());
        }
        assert!(!t.evaluate(Fr::from(5u64)).is_zero());
        assert!(!t.evaluate(Fr::from(0u64)).is_zero());
    }

    #[test]
    fn two_constraints_expand_to_x2_minus_3x_plus_2() {
        let t = vanishing_polynomial::<Fr>(2);
        assert_eq!(
            t.coefficients(),
            &[Fr::from(2u64), -Fr::from(3u64), Fr::from(1u64)]
        );
    }
}

use crate::error::QapError;
use ark_ff::{Field, One, PrimeField, Zero};
use snark_math::Poly;

/// Lagrange interpolation through `points` with pairwise-distinct
/// x-values.
///
/// Returns the unique polynomial of degree below `points.len()` with
/// `p(xᵢ) = yᵢ` for every point.
///
/// # Algorithm
///
/// For each point `i`, the basis `Lᵢ(x) = Πⱼ≠ᵢ (x − xⱼ)` is built by
/// iterative multiplication while the denominator `Πⱼ≠ᵢ (xᵢ − xⱼ)`
/// accumulates separately; the result is `Σᵢ yᵢ / denomᵢ · Lᵢ(x)`.
/// O(n²) in the number of points.
pub fn lagrange_interpolate<F: PrimeField>(points: &[(F, F)]) -> Result<Poly<F>, QapError> {
    if points.is_empty() {
        return Err(QapError::EmptyPoints);
    }
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].0 == points[j].0 {
                return Err(QapError::DuplicateX { first: i, second: j });
            }
        }
    }

    let mut result = Poly::zero();
    for (i, (xi, yi)) in points.iter().enumerate() {
        if yi.is_zero() {
            continue;
        }
        let mut basis = Poly::constant(F::one());
        let mut denominator = F::one();
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            basis = basis * Poly::linear(-*xj, F::one());
            denominator *= *xi - *xj;
        }
        let inverse = denominator
            .inverse()
            .expect("pairwise-distinct x-values give a nonzero denominator");
        result = result + basis.scale(*yi * inverse);
    }
    Ok(result)
}

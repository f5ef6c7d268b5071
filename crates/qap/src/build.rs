use crate::interpolation::lagrange_interpolate;
use crate::vanishing::vanishing_polynomial;
use ark_ff::PrimeField;
use snark_math::Poly;
use snark_r1cs::R1cs;

/// A quadratic arithmetic program.
///
/// One polynomial per wire and matrix: `u[j]` interpolates column `j` of
/// `L` at the points `1..=n` (likewise `v` against `R` and `w` against
/// `O`), so `deg(u[j]) < n`. `t` is the vanishing polynomial of the same
/// points, degree exactly `n`.
#[derive(Clone, Debug)]
pub struct Qap<F: PrimeField> {
    pub u: Vec<Poly<F>>,
    pub v: Vec<Poly<F>>,
    pub w: Vec<Poly<F>>,
    pub t: Poly<F>,
    num_constraints: usize,
    num_wires: usize,
}

impl<F: PrimeField> Qap<F> {
    /// Interpolates the three matrix column families of `r1cs`.
    ///
    /// Constraint `i` of the R1CS becomes the evaluation point `x = i`
    /// (1-based), so `u[j](i) = L[i−1][j]` for every constraint.
    pub fn from_r1cs(r1cs: &R1cs<F>) -> Self {
        let n = r1cs.num_constraints();
        let m = r1cs.num_wires();
        let xs: Vec<F> = (1..=n as u64).map(F::from).collect();

        let interpolate_columns = |matrix: &[Vec<F>]| -> Vec<Poly<F>> {
            (0..m)
                .map(|j| {
                    let points: Vec<(F, F)> = xs
                        .iter()
                        .enumerate()
                        .map(|(row, &x)| (x, matrix[row][j]))
                        .collect();
                    lagrange_interpolate(&points)
                        .expect("constraint points 1..=n are distinct and nonempty")
                })
                .collect()
        };

        Self {
            u: interpolate_columns(r1cs.left()),
            v: interpolate_columns(r1cs.right()),
            w: interpolate_columns(r1cs.output()),
            t: vanishing_polynomial(n),
            num_constraints: n,
            num_wires: m,
        }
    }

    /// Number of constraints `n`.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// Witness length `m`.
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }
}

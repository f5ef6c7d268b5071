use crate::error::R1csError;
use ark_ff::{PrimeField, Zero};

/// A rank-1 constraint system over `F`.
///
/// Three dense `n × m` matrices `L`, `R`, `O` encode one constraint per
/// row: a witness `a` satisfies the system iff
/// `(Lᵢ · a) · (Rᵢ · a) = Oᵢ · a` for every row `i`.
///
/// Circuits write matrix entries as signed integers (`-5` rather than
/// `p − 5`); construction reduces every entry into `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct R1cs<F: PrimeField> {
    left: Vec<Vec<F>>,
    right: Vec<Vec<F>>,
    output: Vec<Vec<F>>,
    num_constraints: usize,
    num_wires: usize,
}

impl<F: PrimeField> R1cs<F> {
    /// Builds the system from signed-integer matrices.
    ///
    /// All three matrices must share the same `n × m` shape with `n ≥ 1`
    /// and `m ≥ 1`.
    pub fn new(
        left: &[Vec<i64>],
        right: &[Vec<i64>],
        output: &[Vec<i64>],
    ) -> Result<Self, R1csError> {
        Self::from_matrices(
            reduce_matrix(left),
            reduce_matrix(right),
            reduce_matrix(output),
        )
    }

    /// Builds the system from matrices whose entries are already field
    /// residues.
    pub fn from_matrices(
        left: Vec<Vec<F>>,
        right: Vec<Vec<F>>,
        output: Vec<Vec<F>>,
    ) -> Result<Self, R1csError> {
        let dims = |m: &[Vec<F>]| (m.len(), m.first().map(Vec::len).unwrap_or(0));
        let (l_dims, r_dims, o_dims) = (dims(&left), dims(&right), dims(&output));
        if l_dims != r_dims || l_dims != o_dims {
            return Err(R1csError::ShapeMismatch {
                l: l_dims,
                r: r_dims,
                o: o_dims,
            });
        }

        let (rows, cols) = l_dims;
        if rows == 0 || cols == 0 {
            return Err(R1csError::Empty);
        }
        for matrix in [&left, &right, &output] {
            for (row, entries) in matrix.iter().enumerate() {
                if entries.len() != cols {
                    return Err(R1csError::RaggedRow {
                        row,
                        actual: entries.len(),
                        expected: cols,
                    });
                }
            }
        }

        Ok(Self {
            left,
            right,
            output,
            num_constraints: rows,
            num_wires: cols,
        })
    }

    /// Number of constraints `n`.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    /// Witness length `m`.
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn left(&self) -> &[Vec<F>] {
        &self.left
    }

    pub fn right(&self) -> &[Vec<F>] {
        &self.right
    }

    pub fn output(&self) -> &[Vec<F>] {
        &self.output
    }

    /// Checks `(Lᵢ · a) · (Rᵢ · a) = Oᵢ · a` on every row. A witness of
    /// the wrong length satisfies nothing.
    pub fn is_satisfied(&self, witness: &[F]) -> bool {
        if witness.len() != self.num_wires {
            return false;
        }
        (0..self.num_constraints).all(|i| {
            let l = dot(&self.left[i], witness);
            let r = dot(&self.right[i], witness);
            let o = dot(&self.output[i], witness);
            l * r == o
        })
    }
}

/// Reduces a signed integer into `[0, p)`.
fn reduce_entry<F: PrimeField>(entry: i64) -> F {
    if entry >= 0 {
        F::from(entry as u64)
    } else {
        -F::from(entry.unsigned_abs())
    }
}

fn reduce_matrix<F: PrimeField>(matrix: &[Vec<i64>]) -> Vec<Vec<F>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&e| reduce_entry(e)).collect())
        .collect()
}

fn dot<F: PrimeField>(row: &[F], witness: &[F]) -> F {
    row.iter()
        .zip(witness)
        .fold(F::zero(), |acc, (c, w)| acc + *c * *w)
}

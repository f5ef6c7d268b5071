use ark_ff::{One, PrimeField};
use snark_r1cs::{R1cs, R1csError};

/// Multiplier circuit: `a · b = c`.
///
/// The smallest non-trivial circuit: a single constraint over the wire
/// vector `[1, c, a, b]`:
///
/// ```text
/// L = [0, 0, 1, 0]   selects a
/// R = [0, 0, 0, 1]   selects b
/// O = [0, 1, 0, 0]   selects c
/// ```
///
/// With one constraint the quotient polynomial is identically zero, so
/// this circuit also exercises the empty `t(τ)` reference-string edge.
pub struct MultiplierCircuit {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl MultiplierCircuit {
    /// Creates the circuit instance. `a · b = c` is not checked here;
    /// use [`MultiplierCircuit::is_consistent`].
    pub fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }

    /// The three constraint matrices.
    pub fn matrices() -> (Vec<Vec<i64>>, Vec<Vec<i64>>, Vec<Vec<i64>>) {
        (
            vec![vec![0, 0, 1, 0]],
            vec![vec![0, 0, 0, 1]],
            vec![vec![0, 1, 0, 0]],
        )
    }

    /// The constraint system over `F`.
    pub fn r1cs<F: PrimeField>() -> Result<R1cs<F>, R1csError> {
        let (l, r, o) = Self::matrices();
        R1cs::new(&l, &r, &o)
    }

    /// The wire assignment `[1, c, a, b]`.
    pub fn witness<F: PrimeField>(&self) -> Vec<F> {
        vec![
            F::one(),
            F::from(self.c),
            F::from(self.a),
            F::from(self.b),
        ]
    }

    /// Whether `a · b = c` holds in `F`.
    pub fn is_consistent<F: PrimeField>(&self) -> bool {
        F::from(self.a) * F::from(self.b) == F::from(self.c)
    }
}

use thiserror::Error;

/// Errors raised while assembling a constraint system.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum R1csError {
    #[error("matrix shapes disagree: L is {l:?}, R is {r:?}, O is {o:?}")]
    ShapeMismatch {
        l: (usize, usize),
        r: (usize, usize),
        o: (usize, usize),
    },

    #[error("ragged matrix: row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("constraint system has no constraints or no wires")]
    Empty,
}

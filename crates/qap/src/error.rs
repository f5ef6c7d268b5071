use thiserror::Error;

/// Errors that can occur during interpolation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QapError {
    #[error("no points provided for interpolation")]
    EmptyPoints,

    #[error("duplicate x-value in interpolation points at indices {first} and {second}")]
    DuplicateX { first: usize, second: usize },
}

use derive_more::{Display, From};

use crate::types::Value;

pub type Result<T> = core::result::Result<T, IsomeshError>;

#[derive(Debug, Display, From)]
pub enum IsomeshError {
    /// Sampling bounds are empty or reversed (`min >= max`), or NaN.
    #[display("invalid sampling bounds: min {min} must be below max {max}")]
    InvalidBounds { min: Value, max: Value },

    /// The sampling step must be strictly positive.
    #[display("invalid step size {_0}: must be > 0")]
    InvalidStepSize(Value),

    /// A vertex stream whose length is not a multiple of 9 contains a
    /// partial triangle and cannot be processed.
    #[display("vertex stream of length {_0} is not whole triangles (multiple of 9)")]
    DanglingVertices(usize),

    /// Parallel vertex and normal streams must have equal lengths.
    #[display("normal stream length {normals} does not match vertex stream length {vertices}")]
    MismatchedNormals { vertices: usize, normals: usize },

    /// PLY file creation or writing failed.
    #[display("ply write failed: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for IsomeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IsomeshError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Error types
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} coordinates, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("lower bound {lo} is greater than upper bound {hi} along axis {axis}")]
    InvertedBounds { axis: usize, lo: f64, hi: f64 },
    #[error("bounds [{lo}, {hi}] along axis {axis} are not finite")]
    NonFiniteBounds { axis: usize, lo: f64, hi: f64 },
    #[error("bounds along axis {axis} should have 2 entries, found {len}")]
    RaggedBounds { axis: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error type for digit-array multiplication.

use convmul_transform::TransformError;
use num_bigint::BigUint;

/// Error type for convolution-based multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MulError {
    /// Malformed input: bad base, out-of-range digit, or unusable lengths.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The modular ring could not be built or searched.
    #[error("ring invariant violated: {0}")]
    Ring(#[from] TransformError),

    /// Complex-transform round-off corrupted the result.
    #[error("precision loss at index {index}: {detail}")]
    PrecisionLoss { index: usize, detail: String },

    /// Carry left over after the last digit was emitted.
    #[error("nonzero carry {carry} left after normalization")]
    ResidualCarry { carry: BigUint },
}

impl MulError {
    /// True for failures that are a known limit of the complex backend.
    #[must_use]
    pub fn is_precision_loss(&self) -> bool {
        matches!(self, Self::PrecisionLoss { .. })
    }
}

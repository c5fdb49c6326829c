//! Errors raised by the transform layer.

use num_bigint::BigUint;

/// Error type for rings, transforms and ring discovery.
///
/// None of these are transient: each one means the caller passed a
/// malformed sequence or a ring was constructed incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Sequence length is zero or not a power of two.
    #[error("transform length {0} is not a power of two")]
    InvalidLength(usize),

    /// Two sequences that must be combined have different lengths.
    #[error("sequence lengths differ: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// The modulus is too small to form a ring.
    #[error("modulus {0} is too small, expected at least 2")]
    InvalidModulus(BigUint),

    /// `value` has no multiplicative inverse modulo `modulus`.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },

    /// A root of order 2^0 was requested.
    #[error("root order must be at least 2^1, got 2^{0}")]
    InvalidOrder(u32),

    /// The bounded candidate search ran out of budget.
    #[error("no ring of order 2^{order_log2} found within {candidates} candidates")]
    SearchExhausted { order_log2: u32, candidates: u64 },
}

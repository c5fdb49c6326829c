//! Defaults and limits for convolution-based multiplication.

/// Smallest usable digit base.
pub const MIN_BASE: u64 = 2;

/// Default budget of (N, r) candidates for the modular ring search.
pub const DEFAULT_RING_CANDIDATES: u64 = convmul_transform::DEFAULT_MAX_CANDIDATES;

/// Default distance from the nearest integer tolerated after a complex
/// inverse transform before the result is declared imprecise.
pub const DEFAULT_ROUNDING_TOLERANCE: f64 = 0.25;

/// Digits at or above this value are not exactly representable as `f64`.
pub const MAX_EXACT_F64_DIGIT: u64 = 1 << 53;

/// Rough ceiling on `length * (base - 1)^2` for the complex backend.
///
/// Beyond it round-off in the transform is expected to corrupt digits.
pub const COMPLEX_SAFE_MAGNITUDE_BITS: u32 = 52;

/// Exit codes used by the harness binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An exact-backend associativity check failed.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

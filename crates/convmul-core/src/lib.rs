//! # convmul-core
//!
//! Arbitrary-precision multiplication by convolution of digit arrays.
//! The convolution runs either through a complex floating-point transform
//! or through an exact number-theoretic transform over a modular ring
//! discovered per call.

pub mod constants;
pub mod convolve;
pub mod digits;
pub mod error;
pub mod multiply;
pub mod normalize;
pub mod options;

// Re-exports
pub use constants::{exit_codes, DEFAULT_RING_CANDIDATES, DEFAULT_ROUNDING_TOLERANCE};
pub use digits::DigitArray;
pub use error::MulError;
pub use multiply::{multiply, multiply_digits, Multiplier};
pub use normalize::normalize;
pub use options::{Backend, MultiplyOptions};

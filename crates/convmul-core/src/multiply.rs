//! Integer and digit-array multiplication through convolution.

use num_bigint::BigUint;
use tracing::debug;

use crate::convolve::convolve;
use crate::digits::DigitArray;
use crate::error::MulError;
use crate::normalize::normalize;
use crate::options::{Backend, MultiplyOptions};

/// Multiplies digit arrays and integers with a fixed set of options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplier {
    options: MultiplyOptions,
}

impl Multiplier {
    /// Create a multiplier; options are normalized first.
    #[must_use]
    pub fn new(options: MultiplyOptions) -> Self {
        Self {
            options: options.normalize(),
        }
    }

    /// Create a multiplier for `backend` with default options.
    #[must_use]
    pub fn with_backend(backend: Backend) -> Self {
        Self::new(MultiplyOptions::with_backend(backend))
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &MultiplyOptions {
        &self.options
    }

    /// Multiply two digit arrays of the same base.
    ///
    /// Both inputs are zero-padded to twice the next power of two of the
    /// longer one, which leaves room for every digit of the product.
    pub fn multiply_digits(&self, x: &DigitArray, y: &DigitArray) -> Result<DigitArray, MulError> {
        if x.base() != y.base() {
            return Err(MulError::InvalidInput(format!(
                "bases differ: {} vs {}",
                x.base(),
                y.base()
            )));
        }
        let base = x.base();
        let n = padded_len(x.len().max(y.len()))?;
        debug!(
            backend = %self.options.backend,
            base,
            x_len = x.len(),
            y_len = y.len(),
            n,
            "multiply digits"
        );

        let z = convolve(&x.padded(n), &y.padded(n), base - 1, &self.options)?;
        normalize(&z, base).map_err(|err| match (err, self.options.backend) {
            (MulError::ResidualCarry { carry }, Backend::Complex) => MulError::PrecisionLoss {
                index: n,
                detail: format!("carry {carry} left after the last digit"),
            },
            (err, _) => err,
        })
    }

    /// Multiply two non-negative integers through base-2 digit arrays.
    pub fn multiply(&self, x: &BigUint, y: &BigUint) -> Result<BigUint, MulError> {
        let xs = DigitArray::from_biguint(x, 2)?;
        let ys = DigitArray::from_biguint(y, 2)?;
        Ok(self.multiply_digits(&xs, &ys)?.to_biguint())
    }
}

/// Multiply two non-negative integers with the exact backend.
pub fn multiply(x: &BigUint, y: &BigUint) -> Result<BigUint, MulError> {
    Multiplier::default().multiply(x, y)
}

/// Multiply two digit arrays with the given backend.
pub fn multiply_digits(
    x: &DigitArray,
    y: &DigitArray,
    backend: Backend,
) -> Result<DigitArray, MulError> {
    Multiplier::with_backend(backend).multiply_digits(x, y)
}

/// `2 * next_power_of_two(len)`, at least the sum of both operand lengths.
fn padded_len(len: usize) -> Result<usize, MulError> {
    len.max(1)
        .checked_next_power_of_two()
        .and_then(|p| p.checked_mul(2))
        .ok_or_else(|| MulError::InvalidInput(format!("operand length {len} is too large")))
}

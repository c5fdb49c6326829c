//! Carry propagation from raw convolution values to base-b digits.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::digits::{check_base, DigitArray};
use crate::error::MulError;

/// Turn convolution values into a normalized digit array.
///
/// A single low-to-high pass keeps a running carry; each position emits
/// `carry mod base` and passes `carry / base` on. The result is cut just
/// past the highest nonzero digit, or is `[0]`. Any carry left after the
/// last position is an error.
pub fn normalize(z: &[BigUint], base: u64) -> Result<DigitArray, MulError> {
    check_base(base)?;
    let wide_base = BigUint::from(base);

    let mut digits = Vec::with_capacity(z.len().max(1));
    let mut carry = BigUint::zero();
    let mut highest = 0;
    for (i, value) in z.iter().enumerate() {
        carry += value;
        let (quotient, remainder) = carry.div_rem(&wide_base);
        let digit = u64::try_from(&remainder).map_err(|_| {
            MulError::InvalidInput(format!("digit at position {i} does not fit below base {base}"))
        })?;
        if digit != 0 {
            highest = i;
        }
        digits.push(digit);
        carry = quotient;
    }

    if !carry.is_zero() {
        return Err(MulError::ResidualCarry { carry });
    }

    digits.truncate(highest + 1);
    if digits.is_empty() {
        digits.push(0);
    }
    Ok(DigitArray::from_normalized(digits, base))
}

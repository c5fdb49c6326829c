//! Digit arrays: integers as little-endian digit sequences in a fixed base.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::constants::MIN_BASE;
use crate::error::MulError;

/// An integer stored as digits in `[0, base)`, least significant first.
///
/// Arrays built by [`DigitArray::new`] may carry trailing zero digits;
/// results of multiplication are always normalized (see
/// [`DigitArray::is_normalized`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitArray {
    digits: Vec<u64>,
    base: u64,
}

impl DigitArray {
    /// Validate and wrap a digit vector. An empty vector means zero.
    pub fn new(digits: Vec<u64>, base: u64) -> Result<Self, MulError> {
        check_base(base)?;
        if let Some((index, &digit)) = digits.iter().enumerate().find(|(_, d)| **d >= base) {
            return Err(MulError::InvalidInput(format!(
                "digit {digit} at index {index} is not below base {base}"
            )));
        }
        if digits.is_empty() {
            return Ok(Self::zero(base));
        }
        Ok(Self { digits, base })
    }

    /// The value zero, stored as `[0]`.
    #[must_use]
    pub fn zero(base: u64) -> Self {
        Self {
            digits: vec![0],
            base,
        }
    }

    /// Digits already known to be valid and normalized.
    pub(crate) fn from_normalized(digits: Vec<u64>, base: u64) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d < base));
        Self { digits, base }
    }

    /// Decompose an integer into digits of `base`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_biguint(value: &BigUint, base: u64) -> Result<Self, MulError> {
        check_base(base)?;
        if value.is_zero() {
            return Ok(Self::zero(base));
        }

        let digits = if base <= 256 {
            value
                .to_radix_le(base as u32)
                .into_iter()
                .map(u64::from)
                .collect()
        } else {
            let divisor = BigUint::from(base);
            let mut rest = value.clone();
            let mut digits = Vec::new();
            while !rest.is_zero() {
                let (quotient, remainder) = rest.div_rem(&divisor);
                let digit = u64::try_from(&remainder).map_err(|_| {
                    MulError::InvalidInput(format!("remainder {remainder} does not fit below base {base}"))
                })?;
                digits.push(digit);
                rest = quotient;
            }
            digits
        };
        Ok(Self { digits, base })
    }

    /// Fold digits from the most significant end: `acc = acc * base + digit`.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        self.digits
            .iter()
            .rev()
            .fold(BigUint::ZERO, |acc, &digit| acc * self.base + digit)
    }

    /// The digit slice, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[u64] {
        &self.digits
    }

    /// Consume and return the digit vector.
    #[must_use]
    pub fn into_digits(self) -> Vec<u64> {
        self.digits
    }

    /// The base.
    #[must_use]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of stored digits, including trailing zeros.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Never true: zero is stored as a single digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True if every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// True if the last digit is nonzero, or the array is exactly `[0]`.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        match self.digits.as_slice() {
            [0] => true,
            [.., last] => *last != 0,
            [] => false,
        }
    }

    /// Copy the digits into a zero-padded vector of length `len`.
    pub(crate) fn padded(&self, len: usize) -> Vec<u64> {
        let mut out = Vec::with_capacity(len);
        out.extend_from_slice(&self.digits);
        out.resize(len, 0);
        out
    }
}

pub(crate) fn check_base(base: u64) -> Result<(), MulError> {
    if base < MIN_BASE {
        return Err(MulError::InvalidInput(format!(
            "base must be at least {MIN_BASE}, got {base}"
        )));
    }
    Ok(())
}

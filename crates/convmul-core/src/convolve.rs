//! Cyclic convolution of digit sequences through a transform.
//!
//! Both sequences must already be zero-padded to the same power-of-two
//! length; when that length is at least the sum of the significant
//! lengths, the cyclic result equals the linear one.

use convmul_transform::{
    find_ring, forward_transform, inverse_transform, pointwise_multiply, ComplexRing,
    WideModularRing,
};
use num_bigint::BigUint;
use num_complex::Complex64;
use tracing::{debug, warn};

use crate::constants::{COMPLEX_SAFE_MAGNITUDE_BITS, MAX_EXACT_F64_DIGIT};
use crate::error::MulError;
use crate::options::{Backend, MultiplyOptions};

/// Convolve `x` and `y`, whose entries are at most `max_digit`.
///
/// Returns `z[i] = sum of x[j] * y[i - j]` with indices taken cyclically.
/// Values can exceed 128 bits for wide digits, so they come back as
/// `BigUint`.
pub fn convolve(
    x: &[u64],
    y: &[u64],
    max_digit: u64,
    options: &MultiplyOptions,
) -> Result<Vec<BigUint>, MulError> {
    check_inputs(x, y, max_digit)?;

    if x.len() == 1 {
        return Ok(vec![BigUint::from(x[0]) * y[0]]);
    }

    match options.backend {
        Backend::Exact => convolve_exact(x, y, max_digit, options),
        Backend::Complex => convolve_complex(x, y, max_digit, options),
    }
}

/// Bits needed to hold `max_digit^2`, the largest pointwise digit product.
#[must_use]
pub fn product_bits(max_digit: u64) -> u32 {
    let square = u128::from(max_digit) * u128::from(max_digit);
    u128::BITS - square.leading_zeros()
}

fn check_inputs(x: &[u64], y: &[u64], max_digit: u64) -> Result<(), MulError> {
    if x.len() != y.len() {
        return Err(MulError::InvalidInput(format!(
            "sequence lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() || !x.len().is_power_of_two() {
        return Err(MulError::InvalidInput(format!(
            "sequence length {} is not a power of two",
            x.len()
        )));
    }
    if let Some(&digit) = x.iter().chain(y).find(|&&d| d > max_digit) {
        return Err(MulError::InvalidInput(format!(
            "digit {digit} exceeds declared maximum {max_digit}"
        )));
    }
    Ok(())
}

/// Number-theoretic transform over a ring sized so nothing aliases.
///
/// With n = 2^k and w = `product_bits(max_digit)`, every convolution value
/// is below n * 2^w, while the modulus found for order 2^(k+w) is at least
/// 2^(k+w) + 1. The root is then squared w times down to order n.
///
/// Moduli that fit in a word use `u64` residues; wider ones use `BigUint`.
fn convolve_exact(
    x: &[u64],
    y: &[u64],
    max_digit: u64,
    options: &MultiplyOptions,
) -> Result<Vec<BigUint>, MulError> {
    let n = x.len();
    let k = n.trailing_zeros();
    let w = product_bits(max_digit);

    let descriptor = find_ring(k + w, &options.search_limit())?.shrink_order(w)?;
    debug!(
        n,
        modulus = %descriptor.modulus,
        root = %descriptor.root,
        modulus_bits = descriptor.modulus.bits(),
        "exact convolution ring"
    );

    if let Some((ring, root)) = descriptor.narrow() {
        let mut a: Vec<u64> = x.iter().map(|&d| ring.reduce(d)).collect();
        let mut b: Vec<u64> = y.iter().map(|&d| ring.reduce(d)).collect();
        forward_transform(&ring, &mut a, &root)?;
        forward_transform(&ring, &mut b, &root)?;

        let mut z = pointwise_multiply(&ring, &a, &b)?;
        inverse_transform(&ring, &mut z, &root)?;
        return Ok(z.into_iter().map(BigUint::from).collect());
    }

    let ring: WideModularRing = descriptor.ring()?;
    let widen = |&d: &u64| ring.reduce(&BigUint::from(d));
    let mut a: Vec<BigUint> = x.iter().map(widen).collect();
    let mut b: Vec<BigUint> = y.iter().map(widen).collect();
    forward_transform(&ring, &mut a, &descriptor.root)?;
    forward_transform(&ring, &mut b, &descriptor.root)?;

    let mut z = pointwise_multiply(&ring, &a, &b)?;
    inverse_transform(&ring, &mut z, &descriptor.root)?;
    Ok(z)
}

/// Floating-point transform with a post-hoc rounding check.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn convolve_complex(
    x: &[u64],
    y: &[u64],
    max_digit: u64,
    options: &MultiplyOptions,
) -> Result<Vec<BigUint>, MulError> {
    if max_digit >= MAX_EXACT_F64_DIGIT {
        return Err(MulError::PrecisionLoss {
            index: 0,
            detail: format!("digit bound {max_digit} is not exact in f64"),
        });
    }

    let n = x.len();
    let magnitude_bits = n.trailing_zeros() + product_bits(max_digit);
    if magnitude_bits > COMPLEX_SAFE_MAGNITUDE_BITS {
        warn!(
            n,
            max_digit, magnitude_bits, "complex convolution beyond safe precision"
        );
    }

    let ring = ComplexRing;
    let root = ComplexRing::root_of_unity(n);
    let to_complex = |&d: &u64| Complex64::new(d as f64, 0.0);
    let mut a: Vec<Complex64> = x.iter().map(to_complex).collect();
    let mut b: Vec<Complex64> = y.iter().map(to_complex).collect();
    forward_transform(&ring, &mut a, &root)?;
    forward_transform(&ring, &mut b, &root)?;

    let mut z = pointwise_multiply(&ring, &a, &b)?;
    inverse_transform(&ring, &mut z, &root)?;

    let tolerance = options.rounding_tolerance;
    z.iter()
        .enumerate()
        .map(|(index, value)| {
            let rounded = value.re.round();
            let off = (value.re - rounded).abs().max(value.im.abs());
            if !rounded.is_finite() || rounded < 0.0 || off > tolerance {
                return Err(MulError::PrecisionLoss {
                    index,
                    detail: format!("value {value} is not within {tolerance} of a non-negative integer"),
                });
            }
            Ok(BigUint::from(rounded as u128))
        })
        .collect()
}

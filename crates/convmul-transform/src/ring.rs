//! Ring arithmetic used by the transform.
//!
//! The transform is written once against [`Ring`] and monomorphized for
//! the backends: complex doubles ([`ComplexRing`]), residues modulo a
//! word-sized integer ([`ModularRing`]) and residues modulo an integer of
//! any width ([`WideModularRing`]).

use std::f64::consts::PI;
use std::fmt::Debug;

use num_bigint::BigUint;
use num_complex::Complex64;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::TransformError;

/// The operations a transform needs from its coefficient ring.
pub trait Ring {
    /// Ring element.
    type Elem: Clone + Debug + PartialEq;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// `a + b`.
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// `a * b`.
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// The element that stands for "divide by `len`".
    ///
    /// Multiplying by it is the normalization step of the inverse transform.
    fn len_inverse(&self, len: usize) -> Result<Self::Elem, TransformError>;

    /// `base^exp` by square-and-multiply.
    fn pow(&self, base: &Self::Elem, mut exp: u64) -> Self::Elem {
        let mut acc = self.one();
        let mut sq = base.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = self.mul(&acc, &sq);
            }
            exp >>= 1;
            if exp > 0 {
                sq = self.mul(&sq, &sq);
            }
        }
        acc
    }
}

/// Complex doubles with ordinary arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexRing;

impl ComplexRing {
    /// `e^(2πi/n)`, a principal n-th root of unity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn root_of_unity(n: usize) -> Complex64 {
        let angle = 2.0 * PI / n as f64;
        Complex64::new(angle.cos(), angle.sin())
    }
}

impl Ring for ComplexRing {
    type Elem = Complex64;

    fn zero(&self) -> Complex64 {
        Complex64::new(0.0, 0.0)
    }

    fn one(&self) -> Complex64 {
        Complex64::new(1.0, 0.0)
    }

    #[inline]
    fn add(&self, a: &Complex64, b: &Complex64) -> Complex64 {
        a + b
    }

    #[inline]
    fn mul(&self, a: &Complex64, b: &Complex64) -> Complex64 {
        a * b
    }

    // 1/len is exact in binary floating point for power-of-two lengths,
    // so scaling by it is the same as dividing by len.
    #[allow(clippy::cast_precision_loss)]
    fn len_inverse(&self, len: usize) -> Result<Complex64, TransformError> {
        if len == 0 {
            return Err(TransformError::InvalidLength(len));
        }
        Ok(Complex64::new(1.0 / len as f64, 0.0))
    }
}

/// Residues modulo a word-sized `modulus`, stored reduced in `[0, modulus)`.
///
/// Products are formed in `u128`, so any 64-bit modulus is safe. Wider
/// moduli use [`WideModularRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModularRing {
    modulus: u64,
}

impl ModularRing {
    /// Create the ring Z/NZ.
    pub fn new(modulus: u64) -> Result<Self, TransformError> {
        if modulus < 2 {
            return Err(TransformError::InvalidModulus(BigUint::from(modulus)));
        }
        Ok(Self { modulus })
    }

    /// The modulus N.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduce an arbitrary value into the ring.
    #[must_use]
    pub fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// `N - 1`, the residue of -1.
    #[must_use]
    pub fn minus_one(&self) -> u64 {
        self.modulus - 1
    }

    /// Multiplicative inverse of `value`, if it exists.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn inverse(&self, value: u64) -> Result<u64, TransformError> {
        let a = i128::from(self.reduce(value));
        let m = i128::from(self.modulus);
        let egcd = a.extended_gcd(&m);
        if egcd.gcd != 1 {
            return Err(TransformError::NoInverse {
                value: BigUint::from(value),
                modulus: BigUint::from(self.modulus),
            });
        }
        Ok(egcd.x.rem_euclid(m) as u64)
    }
}

impl Ring for ModularRing {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1 % self.modulus
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn add(&self, a: &u64, b: &u64) -> u64 {
        ((u128::from(*a) + u128::from(*b)) % u128::from(self.modulus)) as u64
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn mul(&self, a: &u64, b: &u64) -> u64 {
        ((u128::from(*a) * u128::from(*b)) % u128::from(self.modulus)) as u64
    }

    /// When `len` divides `N - 1` the inverse is `N - (N - 1) / len`,
    /// since `len * (N - 1) / len = N - 1 = -1`. Otherwise fall back to
    /// the extended Euclidean algorithm.
    fn len_inverse(&self, len: usize) -> Result<u64, TransformError> {
        let len = u64::try_from(len).map_err(|_| TransformError::InvalidLength(len))?;
        if len == 0 {
            return Err(TransformError::InvalidLength(0));
        }
        let n_minus_one = self.modulus - 1;
        if n_minus_one % len == 0 {
            return Ok(self.modulus - n_minus_one / len);
        }
        self.inverse(len)
    }
}

/// Residues modulo a `BigUint` modulus of any width.
///
/// Elements are kept reduced in `[0, modulus)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideModularRing {
    modulus: BigUint,
}

impl WideModularRing {
    /// Create the ring Z/NZ.
    pub fn new(modulus: BigUint) -> Result<Self, TransformError> {
        if modulus < BigUint::from(2u32) {
            return Err(TransformError::InvalidModulus(modulus));
        }
        Ok(Self { modulus })
    }

    /// The modulus N.
    #[must_use]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduce an arbitrary value into the ring.
    #[must_use]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// `N - 1`, the residue of -1.
    #[must_use]
    pub fn minus_one(&self) -> BigUint {
        &self.modulus - 1u32
    }

    /// Multiplicative inverse of `value`, if it exists.
    pub fn inverse(&self, value: &BigUint) -> Result<BigUint, TransformError> {
        value
            .modinv(&self.modulus)
            .ok_or_else(|| TransformError::NoInverse {
                value: value.clone(),
                modulus: self.modulus.clone(),
            })
    }
}

impl Ring for WideModularRing {
    type Elem = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one() % &self.modulus
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let sum = a + b;
        if sum >= self.modulus {
            sum - &self.modulus
        } else {
            sum
        }
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Same shortcut as [`ModularRing`]: `N - (N - 1) / len` when `len`
    /// divides `N - 1`, the modular inverse otherwise.
    fn len_inverse(&self, len: usize) -> Result<BigUint, TransformError> {
        if len == 0 {
            return Err(TransformError::InvalidLength(0));
        }
        let len = BigUint::from(len);
        let n_minus_one = self.minus_one();
        let (quotient, remainder) = n_minus_one.div_rem(&len);
        if remainder.is_zero() {
            return Ok(&self.modulus - quotient);
        }
        self.inverse(&len)
    }
}

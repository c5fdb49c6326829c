//! Recursive radix-2 Cooley-Tukey transform, forward and inverse.
//!
//! Works over any [`Ring`]. Over complex numbers this is the DFT, over
//! residues modulo N it is the number-theoretic transform. Elements are
//! passed by reference so that wide residues are not copied per butterfly.

use crate::error::TransformError;
use crate::ring::Ring;

/// Reject lengths the radix-2 recursion cannot split.
pub fn check_len(len: usize) -> Result<(), TransformError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(TransformError::InvalidLength(len));
    }
    Ok(())
}

/// Perform the forward transform in-place.
///
/// `root` must have multiplicative order exactly `seq.len()`. Afterwards
/// `seq[i]` holds the input polynomial evaluated at `root^i`.
pub fn forward_transform<R: Ring>(
    ring: &R,
    seq: &mut [R::Elem],
    root: &R::Elem,
) -> Result<(), TransformError> {
    check_len(seq.len())?;
    if seq.len() == 1 {
        return Ok(());
    }

    // One scratch copy for the whole recursion; sub-transforms read it
    // through (offset, stride) and write into halves of `seq`.
    let input = seq.to_vec();
    transform_strided(ring, &input, 0, 1, seq, root);
    Ok(())
}

/// Perform the inverse transform in-place.
///
/// Reversing positions `1..len` turns a transform with `root` into one
/// with `root^-1`; the result is then scaled by `1/len`.
pub fn inverse_transform<R: Ring>(
    ring: &R,
    seq: &mut [R::Elem],
    root: &R::Elem,
) -> Result<(), TransformError> {
    let n = seq.len();
    check_len(n)?;

    seq[1..].reverse();
    forward_transform(ring, seq, root)?;

    let scale = ring.len_inverse(n)?;
    for elem in seq.iter_mut() {
        *elem = ring.mul(elem, &scale);
    }
    Ok(())
}

/// Pointwise product of two transformed sequences.
pub fn pointwise_multiply<R: Ring>(
    ring: &R,
    a: &[R::Elem],
    b: &[R::Elem],
) -> Result<Vec<R::Elem>, TransformError> {
    if a.len() != b.len() {
        return Err(TransformError::LengthMismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| ring.mul(x, y)).collect())
}

/// Transform `input[offset], input[offset + stride], ...` into `out`.
///
/// `out.len()` elements are read from `input`.
fn transform_strided<R: Ring>(
    ring: &R,
    input: &[R::Elem],
    offset: usize,
    stride: usize,
    out: &mut [R::Elem],
    root: &R::Elem,
) {
    let n = out.len();
    if n == 1 {
        out[0] = input[offset].clone();
        return;
    }

    let half = n / 2;
    let root_sq = ring.mul(root, root);
    let (even, odd) = out.split_at_mut(half);
    transform_strided(ring, input, offset, stride * 2, even, &root_sq);
    transform_strided(ring, input, offset + stride, stride * 2, odd, &root_sq);

    // out[i] = even[i mod half] + root^i * odd[i mod half]
    let mut low = ring.one();
    let mut high = ring.pow(root, half as u64);
    for (e, o) in even.iter_mut().zip(odd.iter_mut()) {
        let twisted_low = ring.mul(&low, o);
        let twisted_high = ring.mul(&high, o);
        *o = ring.add(e, &twisted_high);
        *e = ring.add(e, &twisted_low);
        low = ring.mul(&low, root);
        high = ring.mul(&high, root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{ComplexRing, ModularRing, WideModularRing};
    use num_bigint::BigUint;
    use num_complex::Complex64;

    fn naive_dft(ring: &ModularRing, seq: &[u64], root: u64) -> Vec<u64> {
        let n = seq.len();
        (0..n)
            .map(|i| {
                seq.iter().enumerate().fold(0, |acc, (j, x)| {
                    let w = ring.pow(&root, (i * j) as u64);
                    ring.add(&acc, &ring.mul(x, &w))
                })
            })
            .collect()
    }

    #[test]
    fn forward_matches_naive_dft_mod_17() {
        // 9 = 3^2 has order 8 modulo 17.
        let ring = ModularRing::new(17).unwrap();
        let seq = vec![1u64, 2, 3, 4, 0, 0, 0, 0];
        let expected = naive_dft(&ring, &seq, 9);

        let mut data = seq.clone();
        forward_transform(&ring, &mut data, &9).unwrap();
        assert_eq!(data, expected);
    }

    #[test]
    fn modular_roundtrip_identity() {
        let ring = ModularRing::new(17).unwrap();
        let original = vec![5u64, 0, 16, 3, 7, 7, 1, 2];
        let mut data = original.clone();
        forward_transform(&ring, &mut data, &9).unwrap();
        inverse_transform(&ring, &mut data, &9).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn complex_roundtrip_within_tolerance() {
        let ring = ComplexRing;
        let n = 64;
        let root = ComplexRing::root_of_unity(n);
        let original: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new((i * 7 % 13) as f64, 0.0))
            .collect();

        let mut data = original.clone();
        forward_transform(&ring, &mut data, &root).unwrap();
        inverse_transform(&ring, &mut data, &root).unwrap();

        for (i, (got, want)) in data.iter().zip(&original).enumerate() {
            assert!((got - want).norm() < 1e-9, "mismatch at index {i}: {got}");
        }
    }

    #[test]
    fn impulse_transforms_to_all_ones() {
        let ring = ComplexRing;
        let root = ComplexRing::root_of_unity(4);
        let mut data = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        forward_transform(&ring, &mut data, &root).unwrap();
        for value in data {
            assert!((value - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn single_element_unchanged() {
        let ring = ModularRing::new(97).unwrap();
        let mut data = vec![42u64];
        forward_transform(&ring, &mut data, &1).unwrap();
        assert_eq!(data, vec![42]);
        inverse_transform(&ring, &mut data, &1).unwrap();
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn rejects_non_power_of_two() {
        let ring = ModularRing::new(97).unwrap();
        let mut data = vec![1u64, 2, 3];
        assert_eq!(
            forward_transform(&ring, &mut data, &2),
            Err(TransformError::InvalidLength(3))
        );
        let mut empty: Vec<u64> = Vec::new();
        assert_eq!(
            inverse_transform(&ring, &mut empty, &2),
            Err(TransformError::InvalidLength(0))
        );
    }

    #[test]
    fn pointwise_length_mismatch() {
        let ring = ModularRing::new(97).unwrap();
        assert_eq!(
            pointwise_multiply(&ring, &[1, 2], &[3]),
            Err(TransformError::LengthMismatch(2, 1))
        );
        assert_eq!(
            pointwise_multiply(&ring, &[3, 5], &[7, 11]).unwrap(),
            vec![21, 55]
        );
    }

    #[test]
    fn wide_ring_roundtrip_matches_word_ring() {
        // 998244353 = 119 * 2^23 + 1 with primitive root 3.
        let word = ModularRing::new(998_244_353).unwrap();
        let wide = WideModularRing::new(BigUint::from(998_244_353u64)).unwrap();
        let n = 16u64;
        let root = word.pow(&3, (998_244_353 - 1) / n);

        let original: Vec<u64> = (0..n).map(|i| (i * i * 7919) % 998_244_353).collect();
        let mut narrow = original.clone();
        forward_transform(&word, &mut narrow, &root).unwrap();

        let mut wide_data: Vec<BigUint> = original.iter().map(|&v| BigUint::from(v)).collect();
        forward_transform(&wide, &mut wide_data, &BigUint::from(root)).unwrap();
        let widened: Vec<BigUint> = narrow.iter().map(|&v| BigUint::from(v)).collect();
        assert_eq!(wide_data, widened);

        inverse_transform(&wide, &mut wide_data, &BigUint::from(root)).unwrap();
        let back: Vec<BigUint> = original.iter().map(|&v| BigUint::from(v)).collect();
        assert_eq!(wide_data, back);
    }

    proptest::proptest! {
        #[test]
        fn complex_roundtrip_random(values in proptest::collection::vec(0u32..1 << 20, 1..=256)) {
            let n = values.len().next_power_of_two();
            let mut original: Vec<Complex64> =
                values.iter().map(|&v| Complex64::new(f64::from(v), 0.0)).collect();
            original.resize(n, Complex64::new(0.0, 0.0));

            let ring = ComplexRing;
            let root = ComplexRing::root_of_unity(n);
            let mut data = original.clone();
            forward_transform(&ring, &mut data, &root).unwrap();
            inverse_transform(&ring, &mut data, &root).unwrap();

            let scale = original.iter().map(|v| v.norm()).fold(1.0, f64::max);
            for (got, want) in data.iter().zip(&original) {
                proptest::prop_assert!((got - want).norm() <= 1e-6 * scale);
            }
        }
    }
}

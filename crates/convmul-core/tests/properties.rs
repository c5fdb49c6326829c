//! Property-based tests for convolution multiplication.
//!
//! Products are checked against `num-bigint` schoolbook multiplication.

use num_bigint::BigUint;
use proptest::prelude::*;

use convmul_core::{multiply, multiply_digits, normalize, Backend, DigitArray};
use convmul_transform::{
    find_ring, forward_transform, inverse_transform, Ring, SearchLimit, WideModularRing,
};

fn digits_in(base: u64, max_len: usize) -> impl Strategy<Value = DigitArray> {
    prop::collection::vec(0..base, 1..=max_len)
        .prop_map(move |digits| DigitArray::new(digits, base).unwrap())
}

fn base_and_pair() -> impl Strategy<Value = (DigitArray, DigitArray)> {
    (2u64..=1000).prop_flat_map(|base| (digits_in(base, 48), digits_in(base, 48)))
}

fn base_and_triple() -> impl Strategy<Value = (DigitArray, DigitArray, DigitArray)> {
    (2u64..=300).prop_flat_map(|base| {
        (
            digits_in(base, 24),
            digits_in(base, 24),
            digits_in(base, 24),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// multiply agrees with BigUint multiplication.
    #[test]
    fn multiply_matches_biguint(a in any::<u128>(), b in any::<u128>()) {
        let x = BigUint::from(a);
        let y = BigUint::from(b);
        prop_assert_eq!(multiply(&x, &y).unwrap(), &x * &y);
    }

    /// multiply handles operands spanning many limbs.
    #[test]
    fn multiply_multi_limb(a in prop::collection::vec(any::<u32>(), 1..12),
                           b in prop::collection::vec(any::<u32>(), 1..12)) {
        let x = BigUint::new(a);
        let y = BigUint::new(b);
        prop_assert_eq!(multiply(&x, &y).unwrap(), &x * &y);
    }

    /// Exact digit products are the true product in normalized form.
    #[test]
    fn exact_digits_match_biguint((x, y) in base_and_pair()) {
        let z = multiply_digits(&x, &y, Backend::Exact).unwrap();
        prop_assert!(z.is_normalized());
        prop_assert_eq!(z.to_biguint(), x.to_biguint() * y.to_biguint());
    }

    /// Small bases and lengths are well inside the complex backend's range.
    #[test]
    fn complex_agrees_with_exact((x, y) in base_and_pair()) {
        let exact = multiply_digits(&x, &y, Backend::Exact).unwrap();
        let complex = multiply_digits(&x, &y, Backend::Complex).unwrap();
        prop_assert_eq!(complex, exact);
    }

    /// a * (b * c) == (b * a) * c with the exact backend.
    #[test]
    fn exact_associativity((a, b, c) in base_and_triple()) {
        let left = multiply_digits(&a, &multiply_digits(&b, &c, Backend::Exact).unwrap(), Backend::Exact).unwrap();
        let right = multiply_digits(&multiply_digits(&b, &a, Backend::Exact).unwrap(), &c, Backend::Exact).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Normalization preserves the weighted value and leaves no trailing zeros.
    #[test]
    fn normalize_is_canonical(values in prop::collection::vec(any::<u64>(), 0..32),
                              base in 2u64..=1_000_000) {
        let mut z: Vec<BigUint> = values.iter().map(|&v| BigUint::from(v)).collect();
        // Room for the carry out of the top value.
        z.resize(values.len() + 70, BigUint::ZERO);

        let expected = values
            .iter()
            .rev()
            .fold(BigUint::ZERO, |acc, &v| acc * base + v);
        let d = normalize(&z, base).unwrap();
        prop_assert!(d.is_normalized());
        prop_assert!(d.digits().iter().all(|&digit| digit < base));
        prop_assert_eq!(d.to_biguint(), expected);
    }

    /// Inverse undoes forward over discovered rings.
    #[test]
    fn modular_roundtrip(k in 1u32..=10, seed in prop::collection::vec(any::<u64>(), 1024)) {
        let d = find_ring(k, &SearchLimit::default()).unwrap();
        let (ring, root) = d.narrow().unwrap();
        let n = 1usize << k;
        let original: Vec<u64> = seed[..n].iter().map(|&v| ring.reduce(v)).collect();

        let mut data = original.clone();
        forward_transform(&ring, &mut data, &root).unwrap();
        inverse_transform(&ring, &mut data, &root).unwrap();
        prop_assert_eq!(data, original);
        prop_assert_eq!(ring.pow(&root, n as u64), 1);
    }

    /// The same round trip over a modulus wider than 64 bits.
    #[test]
    fn wide_modular_roundtrip(k in 1u32..=6, seed in prop::collection::vec(any::<u128>(), 64)) {
        let d = find_ring(k + 63, &SearchLimit::default()).unwrap().shrink_order(63).unwrap();
        let ring = WideModularRing::new(d.modulus.clone()).unwrap();
        let n = 1usize << k;
        let original: Vec<BigUint> = seed[..n].iter().map(|&v| ring.reduce(&BigUint::from(v))).collect();

        let mut data = original.clone();
        forward_transform(&ring, &mut data, &d.root).unwrap();
        inverse_transform(&ring, &mut data, &d.root).unwrap();
        prop_assert_eq!(data, original);
    }
}

/// Every ring the search returns satisfies the root-of-unity conditions.
#[test]
fn ring_finder_conditions() {
    for k in 1..=40 {
        let d = find_ring(k, &SearchLimit::default()).unwrap();
        let ring = d.ring().unwrap();
        assert_eq!(&d.modulus % (BigUint::from(1u32) << k), BigUint::from(1u32), "k = {k}");
        assert_eq!(ring.pow(&d.root, 1u64 << (k - 1)), ring.minus_one(), "k = {k}");
    }
}

/// Wide bases, where the exact ring no longer fits in a word.
#[test]
fn exact_wide_bases_match_biguint() {
    for log_base in [24u32, 32, 38, 40, 62] {
        let base = 1u64 << log_base;
        let top = base - 1;
        let x = DigitArray::new(vec![top, 12_345, top, 1], base).unwrap();
        let y = DigitArray::new(vec![top, top, 7], base).unwrap();
        let z = multiply_digits(&x, &y, Backend::Exact).unwrap();
        assert!(z.is_normalized(), "base 2^{log_base}");
        assert_eq!(z.to_biguint(), x.to_biguint() * y.to_biguint(), "base 2^{log_base}");
    }
}

/// The product of 13 and 10 through base-2 digit arrays.
#[test]
fn known_product() {
    assert_eq!(
        multiply(&BigUint::from(13u32), &BigUint::from(10u32)).unwrap(),
        BigUint::from(130u32)
    );
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use convmul_core::{multiply_digits, Backend, DigitArray};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Base in [2, 257]; remaining bytes become digits of two operands.
    let base = u64::from(data[0]) + 2;
    let digits: Vec<u64> = data[1..].iter().map(|&b| u64::from(b) % base).collect();
    let (a, b) = digits.split_at(digits.len() / 2);
    let (Ok(x), Ok(y)) = (
        DigitArray::new(a.to_vec(), base),
        DigitArray::new(b.to_vec(), base),
    ) else {
        return;
    };

    let exact = multiply_digits(&x, &y, Backend::Exact).expect("exact backend failed");
    assert_eq!(exact.to_biguint(), x.to_biguint() * y.to_biguint());
    assert!(exact.is_normalized());

    if let Ok(complex) = multiply_digits(&x, &y, Backend::Complex) {
        assert_eq!(complex, exact);
    }
});

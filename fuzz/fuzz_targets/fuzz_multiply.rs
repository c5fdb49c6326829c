#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use convmul_core::multiply;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the split point between the two operands.
    let rest = &data[1..];
    let split = usize::from(data[0]) % (rest.len() + 1);
    let (left, right) = rest.split_at(split);
    let x = BigUint::from_bytes_le(left);
    let y = BigUint::from_bytes_le(right);

    let product = multiply(&x, &y).expect("exact backend failed");
    assert_eq!(product, &x * &y, "x = {x}, y = {y}");
});

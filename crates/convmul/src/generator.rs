//! Seeded random digit arrays for test inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use convmul_core::{DigitArray, MulError};

/// Generate `len` uniformly random digits in `[0, base)`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize, base: u64) -> Result<DigitArray, MulError> {
    if base < 2 {
        return DigitArray::new(Vec::new(), base);
    }
    let digits = (0..len).map(|_| rng.gen_range(0..base)).collect();
    DigitArray::new(digits, base)
}

/// A reproducible stream of digit arrays.
pub struct DigitGenerator {
    rng: StdRng,
}

impl DigitGenerator {
    /// Create a generator; equal seeds give equal streams.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next array of `len` digits in `base`.
    pub fn generate(&mut self, len: usize, base: u64) -> Result<DigitArray, MulError> {
        generate(&mut self.rng, len, base)
    }
}

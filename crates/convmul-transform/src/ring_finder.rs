//! Discovery of a modular ring that carries a root of unity of order 2^k.
//!
//! Searches moduli N = t * 2^k + 1 for t = 1, 2, ... and, for each, the
//! candidates r in [2, t + 1]. A candidate is accepted when
//! r^(2^(k-1)) = -1 mod N, which pins its order to exactly 2^k.
//! N is usually prime but is not required to be. N has no width limit;
//! large orders simply give moduli wider than a machine word.

use num_bigint::BigUint;
use num_traits::One;
use tracing::{debug, trace};

use crate::error::TransformError;
use crate::ring::{ModularRing, Ring, WideModularRing};

/// Default number of (N, r) candidates tried before giving up.
pub const DEFAULT_MAX_CANDIDATES: u64 = 1 << 22;

/// Budget for the brute-force search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimit {
    /// Maximum number of (N, r) pairs to test.
    pub max_candidates: u64,
}

impl Default for SearchLimit {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// A modulus together with a root of order `2^order_log2` modulo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingDescriptor {
    /// N = t * 2^order_log2 + 1.
    pub modulus: BigUint,
    /// Element of multiplicative order exactly `2^order_log2`.
    pub root: BigUint,
    /// log2 of the root's order.
    pub order_log2: u32,
}

impl RingDescriptor {
    /// The ring Z/NZ this descriptor lives in.
    pub fn ring(&self) -> Result<WideModularRing, TransformError> {
        WideModularRing::new(self.modulus.clone())
    }

    /// The same ring with word-sized arithmetic, when N fits in a `u64`.
    pub fn narrow(&self) -> Option<(ModularRing, u64)> {
        let modulus = u64::try_from(&self.modulus).ok()?;
        let root = u64::try_from(&self.root).ok()?;
        ModularRing::new(modulus).ok().map(|ring| (ring, root))
    }

    /// Square the root `by` times, dividing its order by `2^by`.
    ///
    /// The modulus is unchanged, so the ring stays oversized relative to
    /// the new order.
    pub fn shrink_order(&self, by: u32) -> Result<Self, TransformError> {
        if by >= self.order_log2 {
            return Err(TransformError::InvalidOrder(
                self.order_log2.saturating_sub(by),
            ));
        }
        let ring = self.ring()?;
        Ok(Self {
            modulus: self.modulus.clone(),
            root: square_times(&ring, &self.root, by),
            order_log2: self.order_log2 - by,
        })
    }

    /// Check `N = 1 mod 2^k` and `root^(2^(k-1)) = N - 1`.
    #[must_use]
    pub fn verify(&self) -> bool {
        if self.order_log2 == 0 {
            return false;
        }
        let Ok(ring) = self.ring() else {
            return false;
        };
        if self.modulus < BigUint::from(3u32) {
            return false;
        }
        let step = BigUint::one() << self.order_log2;
        if ring.minus_one() % step != BigUint::ZERO {
            return false;
        }
        square_times(&ring, &ring.reduce(&self.root), self.order_log2 - 1) == ring.minus_one()
    }
}

/// Find (N, r) with r of order exactly `2^order_log2` modulo N.
pub fn find_ring(order_log2: u32, limit: &SearchLimit) -> Result<RingDescriptor, TransformError> {
    if order_log2 == 0 {
        return Err(TransformError::InvalidOrder(0));
    }

    let step = BigUint::one() << order_log2;
    let mut candidates = 0u64;
    let mut multiplier = 1u64;
    loop {
        let modulus = &step * multiplier + 1u32;
        let ring = WideModularRing::new(modulus)?;
        let minus_one = ring.minus_one();

        for root in 2..=multiplier + 1 {
            if candidates >= limit.max_candidates {
                return Err(TransformError::SearchExhausted {
                    order_log2,
                    candidates,
                });
            }
            candidates += 1;

            let root = BigUint::from(root);
            if square_times(&ring, &root, order_log2 - 1) == minus_one {
                debug!(order_log2, modulus = %ring.modulus(), %root, candidates, "found ring");
                return Ok(RingDescriptor {
                    modulus: ring.modulus().clone(),
                    root,
                    order_log2,
                });
            }
        }

        trace!(order_log2, multiplier, modulus = %ring.modulus(), "no root for modulus");
        multiplier += 1;
    }
}

fn square_times(ring: &WideModularRing, value: &BigUint, times: u32) -> BigUint {
    (0..times).fold(value.clone(), |s, _| ring.mul(&s, &s))
}

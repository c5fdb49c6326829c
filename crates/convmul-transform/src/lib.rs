//! # convmul-transform
//!
//! Radix-2 Cooley-Tukey transforms over complex doubles and over
//! integers modulo N, plus the search for a modulus that carries a root
//! of unity of a required power-of-two order.

pub mod error;
pub mod ring;
pub mod ring_finder;
pub mod transform;

// Re-exports
pub use error::TransformError;
pub use ring::{ComplexRing, ModularRing, Ring, WideModularRing};
pub use ring_finder::{find_ring, RingDescriptor, SearchLimit, DEFAULT_MAX_CANDIDATES};
pub use transform::{forward_transform, inverse_transform, pointwise_multiply};

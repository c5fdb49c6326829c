//! Multiplication options and backend selection.

use std::fmt;
use std::str::FromStr;

use convmul_transform::SearchLimit;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RING_CANDIDATES, DEFAULT_ROUNDING_TOLERANCE};

/// Which transform carries the convolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Floating-point complex transform. Fast, bounded precision.
    Complex,
    /// Number-theoretic transform over a discovered modular ring.
    #[default]
    Exact,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complex => f.write_str("complex"),
            Self::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complex" | "fft" => Ok(Self::Complex),
            "exact" | "ntt" | "modular" => Ok(Self::Exact),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

/// Options for a multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplyOptions {
    /// Transform backend.
    pub backend: Backend,
    /// Candidate budget for the modular ring search (0 = default).
    pub ring_candidates: u64,
    /// Rounding slack for the complex backend, in (0, 0.5).
    pub rounding_tolerance: f64,
}

impl Default for MultiplyOptions {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            ring_candidates: DEFAULT_RING_CANDIDATES,
            rounding_tolerance: DEFAULT_ROUNDING_TOLERANCE,
        }
    }
}

impl MultiplyOptions {
    /// Options for the given backend, defaults elsewhere.
    #[must_use]
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            ..Self::default()
        }
    }

    /// Normalize options, replacing unusable values with defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.ring_candidates == 0 {
            self.ring_candidates = DEFAULT_RING_CANDIDATES;
        }
        if !(self.rounding_tolerance > 0.0 && self.rounding_tolerance < 0.5) {
            self.rounding_tolerance = DEFAULT_ROUNDING_TOLERANCE;
        }
        self
    }

    /// Search budget handed to the ring finder.
    #[must_use]
    pub fn search_limit(&self) -> SearchLimit {
        SearchLimit {
            max_candidates: self.ring_candidates,
        }
    }
}

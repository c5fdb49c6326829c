//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use convmul_core::{Backend, MultiplyOptions};

/// Largest accepted log2 of the digit-array length.
pub const MAX_LOG_SIZE: u32 = 24;

/// Largest accepted log2 of the digit base.
pub const MAX_LOG_BASE: u32 = 62;

/// log2 length of the bit-grouping experiment.
pub const GROUPING_LOG_SIZE: u32 = 15;

/// log2 base of the bit-grouping experiment: 32 bits packed per digit.
pub const GROUPING_LOG_BASE: u32 = 32;

/// Default RNG seed for generated digit arrays.
pub const DEFAULT_SEED: u64 = 2_478_721_839;

/// Which experiment to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Base 2, lengths 2^0 ..= 2^max-log-size.
    Sizes,
    /// Length 2^log-size, bases 2^0, 2^2, ... up to 2^max-log-base.
    Bases,
    /// One test at length 2^log-size and base 2^log-base.
    Single,
    /// 2^15 digits of 32 grouped bits each, instead of 2^20 single bits.
    Grouping,
}

/// Which backends to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendChoice {
    /// Number-theoretic transform only.
    Exact,
    /// Complex floating-point transform only.
    Complex,
    /// Both, on the same generated inputs.
    Both,
}

/// Associativity and timing checks for transform-based digit multiplication.
#[derive(Parser, Debug)]
#[command(name = "convmul", version, about)]
pub struct AppConfig {
    /// Experiment to run.
    #[arg(long, value_enum, default_value = "sizes")]
    pub mode: Mode,

    /// Transform backend(s) to test.
    #[arg(long, value_enum, default_value = "both")]
    pub backend: BackendChoice,

    /// Largest log2 length for `sizes` mode.
    #[arg(long, default_value = "12")]
    pub max_log_size: u32,

    /// log2 length for `bases` and `single` modes.
    #[arg(long, default_value = "10")]
    pub log_size: u32,

    /// Largest log2 base for `bases` mode.
    #[arg(long, default_value = "38")]
    pub max_log_base: u32,

    /// log2 base for `single` mode.
    #[arg(long, default_value = "1")]
    pub log_base: u32,

    /// Seed for the digit generator.
    #[arg(long, default_value_t = DEFAULT_SEED, env = "CONVMUL_SEED")]
    pub seed: u64,

    /// Candidate budget for the modular ring search (0 = default).
    #[arg(long, default_value = "0")]
    pub ring_candidates: u64,

    /// Rounding tolerance for the complex backend.
    #[arg(long, default_value = "0.25")]
    pub tolerance: f64,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only the summary line).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Rejected flag combinations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("log2 size {0} exceeds the maximum of {MAX_LOG_SIZE}")]
    SizeTooLarge(u32),

    #[error("log2 base {0} exceeds the maximum of {MAX_LOG_BASE}")]
    BaseTooLarge(u32),

    #[error("log2 base must be at least 1")]
    BaseTooSmall,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check flag ranges before any work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for size in [self.max_log_size, self.log_size] {
            if size > MAX_LOG_SIZE {
                return Err(ConfigError::SizeTooLarge(size));
            }
        }
        for base in [self.max_log_base, self.log_base] {
            if base > MAX_LOG_BASE {
                return Err(ConfigError::BaseTooLarge(base));
            }
        }
        if self.log_base == 0 {
            return Err(ConfigError::BaseTooSmall);
        }
        Ok(())
    }

    /// Backends selected by `--backend`.
    #[must_use]
    pub fn backends(&self) -> Vec<Backend> {
        match self.backend {
            BackendChoice::Exact => vec![Backend::Exact],
            BackendChoice::Complex => vec![Backend::Complex],
            BackendChoice::Both => vec![Backend::Exact, Backend::Complex],
        }
    }

    /// Multiplication options for one backend.
    #[must_use]
    pub fn multiply_options(&self, backend: Backend) -> MultiplyOptions {
        MultiplyOptions {
            backend,
            ring_candidates: self.ring_candidates,
            rounding_tolerance: self.tolerance,
        }
        .normalize()
    }

    /// (log2 length, log2 base) pairs to test, in order.
    #[must_use]
    pub fn cases(&self) -> Vec<(u32, u32)> {
        match self.mode {
            Mode::Sizes => (0..=self.max_log_size).map(|i| (i, 1)).collect(),
            // Base 2^0 = 1 has no digits; it is promoted to 2.
            Mode::Bases => (0..=self.max_log_base / 2)
                .map(|i| (self.log_size, (2 * i).max(1)))
                .collect(),
            Mode::Single => vec![(self.log_size, self.log_base)],
            Mode::Grouping => vec![(GROUPING_LOG_SIZE, GROUPING_LOG_BASE)],
        }
    }
}

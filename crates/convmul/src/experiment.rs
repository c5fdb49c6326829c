//! Associativity experiments: a·(b·c) against (b·a)·c.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use convmul_core::{Backend, DigitArray, MulError, Multiplier, MultiplyOptions};

use crate::generator::DigitGenerator;

/// Result of one associativity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both sides agree.
    Success,
    /// Both sides computed but differ.
    Failure,
    /// The complex backend detected round-off damage.
    PrecisionLoss,
    /// Any other multiplication error.
    Error,
}

impl Outcome {
    /// Label used in text reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::PrecisionLoss => "Failure (precision)",
            Self::Error => "Error",
        }
    }
}

/// One row of the report.
#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    pub backend: Backend,
    pub log_size: u32,
    pub log_base: u32,
    pub outcome: Outcome,
    /// Wall time divided by the four multiplications performed.
    pub seconds_per_multiply: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Counts over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub exact_failures: usize,
    pub exact_errors: usize,
    pub complex_failures: usize,
}

impl Summary {
    /// Tally records by backend and outcome.
    #[must_use]
    pub fn from_records(records: &[TestRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match (record.backend, record.outcome) {
                (_, Outcome::Success) => {}
                (Backend::Exact, Outcome::Error) => summary.exact_errors += 1,
                (Backend::Exact, _) => summary.exact_failures += 1,
                (Backend::Complex, _) => summary.complex_failures += 1,
            }
        }
        summary
    }
}

/// Compute both sides of the associativity identity.
pub fn check_associativity(
    multiplier: &Multiplier,
    a: &DigitArray,
    b: &DigitArray,
    c: &DigitArray,
) -> Result<bool, MulError> {
    let left = multiplier.multiply_digits(a, &multiplier.multiply_digits(b, c)?)?;
    let right = multiplier.multiply_digits(&multiplier.multiply_digits(b, a)?, c)?;
    Ok(left == right)
}

/// Generate one input triple and test it under every option set.
pub fn run_case(
    generator: &mut DigitGenerator,
    options: &[MultiplyOptions],
    log_size: u32,
    log_base: u32,
) -> Result<Vec<TestRecord>, MulError> {
    let len = 1usize << log_size;
    let base = 1u64 << log_base;
    let a = generator.generate(len, base)?;
    let b = generator.generate(len, base)?;
    let c = generator.generate(len, base)?;

    let records = options
        .iter()
        .map(|opts| {
            let multiplier = Multiplier::new(*opts);
            let start = Instant::now();
            let result = check_associativity(&multiplier, &a, &b, &c);
            let seconds_per_multiply = start.elapsed().as_secs_f64() / 4.0;

            let (outcome, detail) = match result {
                Ok(true) => (Outcome::Success, None),
                Ok(false) => (Outcome::Failure, None),
                Err(err) if err.is_precision_loss() => (Outcome::PrecisionLoss, Some(err.to_string())),
                Err(err) => (Outcome::Error, Some(err.to_string())),
            };
            debug!(backend = %opts.backend, log_size, log_base, ?outcome, "case finished");

            TestRecord {
                backend: opts.backend,
                log_size,
                log_base,
                outcome,
                seconds_per_multiply,
                detail,
            }
        })
        .collect();
    Ok(records)
}

/// Run every case in order with one generator.
pub fn run_cases(
    seed: u64,
    options: &[MultiplyOptions],
    cases: &[(u32, u32)],
) -> Result<Vec<TestRecord>, MulError> {
    let mut generator = DigitGenerator::new(seed);
    let mut records = Vec::with_capacity(cases.len() * options.len());
    for &(log_size, log_base) in cases {
        info!(log_size, log_base, "running associativity case");
        records.extend(run_case(&mut generator, options, log_size, log_base)?);
    }
    Ok(records)
}

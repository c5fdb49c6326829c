//! Text and JSON reports for experiment results.

use std::io::{self, Write};

use serde::Serialize;

use crate::experiment::{Summary, TestRecord};

/// Format one record the way the text report prints it.
#[must_use]
pub fn format_record(record: &TestRecord) -> String {
    format!(
        "Test 2^{} digits | base 2^{} | {} | {} | {:.2} seconds",
        record.log_size,
        record.log_base,
        record.backend,
        record.outcome.label(),
        record.seconds_per_multiply
    )
}

/// Format the closing summary line.
#[must_use]
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "{} tests | {} exact failures | {} exact errors | {} complex failures",
        summary.total, summary.exact_failures, summary.exact_errors, summary.complex_failures
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [TestRecord],
    summary: &'a Summary,
}

/// Writes experiment results as text or JSON.
pub struct ReportPresenter {
    json: bool,
    quiet: bool,
}

impl ReportPresenter {
    #[must_use]
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Write all records followed by the summary.
    pub fn present<W: Write>(
        &self,
        out: &mut W,
        records: &[TestRecord],
        summary: &Summary,
    ) -> io::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, &JsonReport { records, summary })?;
            return writeln!(out);
        }

        if !self.quiet {
            for record in records {
                writeln!(out, "{}", format_record(record))?;
                if let Some(detail) = &record.detail {
                    writeln!(out, "    {detail}")?;
                }
            }
        }
        writeln!(out, "{}", format_summary(summary))
    }
}

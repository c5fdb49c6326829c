//! Application entry point and dispatch.

use std::io::Write;

use anyhow::Result;

use convmul_core::exit_codes;

use crate::config::AppConfig;
use crate::errors::exit_code;
use crate::experiment::{run_cases, Summary};
use crate::report::ReportPresenter;

/// Run the configured experiment and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    if let Err(err) = config.validate() {
        eprintln!("Error: {err}");
        return Ok(exit_codes::ERROR_CONFIG);
    }

    let options: Vec<_> = config
        .backends()
        .into_iter()
        .map(|backend| config.multiply_options(backend))
        .collect();
    let records = run_cases(config.seed, &options, &config.cases())?;
    let summary = Summary::from_records(&records);

    let presenter = ReportPresenter::new(config.json, config.quiet);
    let mut out = std::io::stdout().lock();
    presenter.present(&mut out, &records, &summary)?;
    out.flush()?;

    Ok(exit_code(&summary))
}

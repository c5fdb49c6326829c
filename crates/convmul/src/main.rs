//! convmul: associativity and timing checks for transform-based multiplication.

use anyhow::Result;
use convmul_lib::{app, config};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    let code = app::run(&config)?;
    if code != convmul_core::exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

//! zeugnis CLI binary entry point
//!
//! Installs logging, then hands over to the library's `run_cli()`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use zeugnis_cli::run_cli;

fn main() -> Result<()> {
    // RUST_LOG overrides; warnings only by default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}

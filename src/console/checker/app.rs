//! Program to diagnose a local Smart Soil Monitoring System deployment.
//!
//! ```text
//! cargo run --bin diagnose
//! ```
//!
//! All targets (runtimes, file lists, ports) are fixed in
//! [`super::config`]; the tool takes no arguments beyond the generated
//! `--help` and `--version`.
use anyhow::Result;
use clap::Parser;
use tracing::Level;

use super::service::Service;
use crate::console::console::Console;
use crate::console::report::CheckReport;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {}

/// # Errors
///
/// Returns an error only when the Python interpreter self-check fails (the
/// single fatal check); the process then exits with a non-zero code.
pub async fn run() -> Result<Vec<CheckReport>> {
    let () = tracing_subscriber::fmt().compact().with_max_level(Level::INFO).init();

    let Args {} = Args::parse();

    let service = Service::new(Console::default());

    service.run_checks().await
}

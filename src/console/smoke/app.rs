//! Program to smoke-test a running Smart Soil Monitoring System.
//!
//! ```text
//! cargo run --bin system_test
//! ```
//!
//! The payload and endpoints are fixed in [`super::config`]. The process
//! always exits zero; the output is informational.
use clap::Parser;
use tracing::Level;

use super::service::{Service, TierResult};
use crate::console::console::Console;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {}

pub async fn run() -> Vec<TierResult> {
    let () = tracing_subscriber::fmt().compact().with_max_level(Level::INFO).init();

    let Args {} = Args::parse();

    let service = Service::new(Console::default());

    service.run_checks().await
}

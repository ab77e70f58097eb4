//! Diagnostic tool for a local Smart Soil Monitoring System deployment.
//!
//! ```text
//! cargo run --bin diagnose
//! ```
use soil_system_tools::console::checker::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Exits non-zero only when the Python interpreter self-check fails.
    app::run().await?;

    Ok(())
}

//! Console tools for the Smart Soil Monitoring System.
//!
//! The system has three tiers: a Python ML inference server (port 5001), a
//! Node backend (port 5000) and a browser frontend served by the backend.
//! This crate ships two small tools that support running it locally:
//!
//! - `diagnose`: read-only environment diagnostic (runtimes, Python
//!   packages, expected files, port availability).
//! - `system_test`: end-to-end smoke test posting one fixed soil-parameter
//!   payload through the tiers.
pub mod console;

//! End-to-end smoke test for a running Smart Soil Monitoring System.
//!
//! Sends one fixed soil-parameter payload to the ML tier and the backend
//! tier, then fetches the frontend root, printing each response. Purely
//! informational: no assertions, no retries, always exits zero.
pub mod app;
pub mod checks;
pub mod config;
pub mod service;

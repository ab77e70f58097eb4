//! Read-only environment diagnostic for the Smart Soil Monitoring System.
//!
//! It inspects the local environment (runtimes, Python packages, expected
//! files, port availability) and prints colorized pass/fail/warn lines plus
//! static remediation text. It never mutates anything on the machine.
pub mod app;
pub mod checks;
pub mod config;
pub mod service;

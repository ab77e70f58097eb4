pub mod deps;
pub mod files;
pub mod ports;
pub mod runtime;

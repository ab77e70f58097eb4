//! Console tools: the environment diagnostic (`checker`) and the
//! three-tier smoke test (`smoke`), plus the presentation layer they share.
pub mod checker;
pub mod console;
pub mod logger;
pub mod printer;
pub mod report;
pub mod smoke;

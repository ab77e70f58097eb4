//! Structured check results and the renderer that turns them into
//! colorized console lines.
//!
//! Checks never format their own output: they return a [`CheckReport`] and
//! the renderer decides text and color. This keeps the check logic
//! assertable in tests and leaves room for a machine-readable output mode.
use owo_colors::OwoColorize;
use serde::Serialize;

use super::printer::Printer;

pub const HEADER_RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Pass,
    Fail,
    Warn,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub status: Status,
    pub label: String,
    pub detail: Option<String>,
}

impl CheckReport {
    #[must_use]
    pub fn pass(label: impl Into<String>) -> Self {
        Self::new(Status::Pass, label)
    }

    #[must_use]
    pub fn fail(label: impl Into<String>) -> Self {
        Self::new(Status::Fail, label)
    }

    #[must_use]
    pub fn warn(label: impl Into<String>) -> Self {
        Self::new(Status::Warn, label)
    }

    #[must_use]
    pub fn info(label: impl Into<String>) -> Self {
        Self::new(Status::Info, label)
    }

    fn new(status: Status, label: impl Into<String>) -> Self {
        Self {
            status,
            label: label.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Prints a section header: a cyan 60-char rule, the title, another rule.
pub fn header<P: Printer + ?Sized>(printer: &P, title: &str) {
    let rule = "=".repeat(HEADER_RULE_WIDTH);

    printer.println("");
    printer.println(&rule.cyan().to_string());
    printer.println(&title.cyan().to_string());
    printer.println(&rule.cyan().to_string());
    printer.println("");
}

/// Renders one report as an emoji-prefixed, colorized line.
pub fn render<P: Printer + ?Sized>(printer: &P, report: &CheckReport) {
    let text = match &report.detail {
        Some(detail) => format!("{} - {}", report.label, detail),
        None => report.label.clone(),
    };

    let line = match report.status {
        Status::Pass => format!("✅ {text}").green().to_string(),
        Status::Fail => format!("❌ {text}").red().to_string(),
        Status::Warn => format!("⚠️  {text}").yellow().to_string(),
        Status::Info => format!("ℹ️  {text}").blue().to_string(),
    };

    printer.println(&line);
}

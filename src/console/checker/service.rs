use std::path::PathBuf;

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use super::checks::{deps, files, ports, runtime};
use super::config;
use crate::console::printer::Printer;
use crate::console::report::{self, CheckReport, Status};

/// Runs the whole diagnostic sequence against one environment.
///
/// `base_dir` and `interpreter` default to the working directory and
/// [`config::PYTHON`]; tests point them at fixtures.
pub struct Service<P: Printer> {
    pub printer: P,
    pub base_dir: PathBuf,
    pub interpreter: String,
}

impl<P: Printer> Service<P> {
    pub fn new(printer: P) -> Self {
        Self {
            printer,
            base_dir: PathBuf::from("."),
            interpreter: config::PYTHON.to_string(),
        }
    }

    /// Runs every check in order and returns the collected reports.
    ///
    /// # Errors
    ///
    /// Returns an error only when the Python interpreter self-check fails;
    /// every other failure is folded into a report and execution continues.
    pub async fn run_checks(&self) -> Result<Vec<CheckReport>> {
        let mut reports = Vec::new();

        report::header(&self.printer, "🌱 SMART SOIL MONITORING SYSTEM - DIAGNOSTIC TOOL");

        self.check_interpreter(&mut reports).await?;
        self.check_companion_runtimes(&mut reports).await;
        self.check_python_packages(&mut reports).await;
        self.check_files(&mut reports);
        self.check_ports(&mut reports).await;

        self.print_recommendations();
        self.print_summary();

        Ok(reports)
    }

    /// The only fatal check: the ML tier's interpreter must be present.
    async fn check_interpreter(&self, reports: &mut Vec<CheckReport>) -> Result<()> {
        report::render(&self.printer, &CheckReport::info("Checking Python installation..."));

        let python = runtime::run_version_probe(&self.interpreter, "Python", None).await;
        report::render(&self.printer, &python);

        let failed = python.status == Status::Fail;
        reports.push(python);

        if failed {
            bail!("Python interpreter not available");
        }

        Ok(())
    }

    async fn check_companion_runtimes(&self, reports: &mut Vec<CheckReport>) {
        for probe in config::companion_runtimes() {
            report::render(
                &self.printer,
                &CheckReport::info(format!("Checking {} installation...", probe.label)),
            );

            let result = runtime::run_version_probe(probe.program, probe.label, probe.hint).await;
            report::render(&self.printer, &result);
            reports.push(result);
        }
    }

    async fn check_python_packages(&self, reports: &mut Vec<CheckReport>) {
        report::header(&self.printer, "Python Dependencies Check");

        let checks = deps::run(&self.interpreter, &config::required_packages()).await;

        for check in &checks {
            report::render(&self.printer, &check.report);
        }

        let missing = deps::missing_packages(&checks);

        if !missing.is_empty() {
            report::render(
                &self.printer,
                &CheckReport::warn(format!("\nMissing packages: {}", missing.join(", "))),
            );
            report::render(
                &self.printer,
                &CheckReport::info(format!("Fix: Run this in {} folder:", config::ML_SERVICE_DIR)),
            );
            self.printer.println(&config::PIP_INSTALL_HINT.cyan().to_string());
            self.printer.println("");
        }

        reports.extend(checks.into_iter().map(|check| check.report));
    }

    fn check_files(&self, reports: &mut Vec<CheckReport>) {
        for group in config::file_groups() {
            report::header(&self.printer, group.title);

            for result in files::run(&self.base_dir, &group) {
                report::render(&self.printer, &result);
                reports.push(result);
            }
        }
    }

    async fn check_ports(&self, reports: &mut Vec<CheckReport>) {
        report::header(&self.printer, "Port Availability Check");

        for probe in config::ports_to_check() {
            let result = ports::run(&probe).await;
            report::render(&self.printer, &result);
            reports.push(result);
        }
    }

    fn print_recommendations(&self) {
        report::header(&self.printer, "📋 RECOMMENDATIONS");
        self.printer.println(&config::RECOMMENDATIONS.yellow().to_string());
    }

    fn print_summary(&self) {
        report::header(&self.printer, "✅ DIAGNOSTIC COMPLETE");
        report::render(
            &self.printer,
            &CheckReport::info("For detailed setup instructions, read: SETUP_GUIDE.md"),
        );
        report::render(
            &self.printer,
            &CheckReport::info("For API documentation, check: README.md"),
        );
        self.printer.println("");
    }
}

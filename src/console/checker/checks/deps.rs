//! Python package importability probes.
use tokio::process::Command;
use tokio::time::timeout;

use crate::console::checker::config::{PackageProbe, SUBPROCESS_TIMEOUT};
use crate::console::report::CheckReport;

pub struct PackageCheck {
    pub probe: PackageProbe,
    pub report: CheckReport,
}

/// Probes every package by running `<interpreter> -c "import <name>"`.
pub async fn run(interpreter: &str, probes: &[PackageProbe]) -> Vec<PackageCheck> {
    let mut checks = Vec::with_capacity(probes.len());

    for probe in probes {
        let report = match import_probe(interpreter, probe.import_name).await {
            Ok(()) => CheckReport::pass(format!("  {} ✓", probe.dist_name)),
            Err(err) => {
                tracing::debug!("import probe for {} failed: {err}", probe.import_name);

                CheckReport::fail(format!("  {} ✗", probe.dist_name))
            }
        };

        checks.push(PackageCheck { probe: *probe, report });
    }

    checks
}

/// The pip dist names of the packages whose import failed, in probe order.
#[must_use]
pub fn missing_packages(checks: &[PackageCheck]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|check| !check.report.passed())
        .map(|check| check.probe.dist_name)
        .collect()
}

async fn import_probe(interpreter: &str, import_name: &str) -> Result<(), String> {
    let status = timeout(
        SUBPROCESS_TIMEOUT,
        Command::new(interpreter)
            .args(["-c", &format!("import {import_name}")])
            .output(),
    )
    .await
    .map_err(|_| "command timeout".to_string())?
    .map_err(|err| err.to_string())?
    .status;

    if status.success() {
        Ok(())
    } else {
        Err(format!("exit status: {status}"))
    }
}
